use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionWrapperProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_else(|| classes!("text-dark"))]
    pub title_class: Classes,
    #[prop_or_else(|| classes!("text-muted"))]
    pub description_class: Classes,
    /// Rendered under the title block.
    #[prop_or_default]
    pub header_actions: Option<Html>,
    /// Absolutely positioned background layers (grids, canvases, glows).
    #[prop_or_default]
    pub decor: Html,
    #[prop_or_default]
    pub children: Children,
}

/// Page section with an optional centred heading. The `<section>` is the
/// positioning context for its decor, so backgrounds bleed full width.
#[function_component(SectionWrapper)]
pub fn section_wrapper(props: &SectionWrapperProps) -> Html {
    let has_header = props.title.is_some() || props.description.is_some();

    html! {
        <section id={props.id.clone()} class={classes!("section", props.class.clone())}>
            { props.decor.clone() }
            <div class="section-container">
                if has_header {
                    <div class="section-header">
                        if let Some(title) = &props.title {
                            <h2 class={classes!("section-title", props.title_class.clone())}>{ title }</h2>
                        }
                        if let Some(description) = &props.description {
                            <p class={classes!("section-description", props.description_class.clone())}>{ description }</p>
                        }
                        if let Some(actions) = &props.header_actions {
                            <div class="section-actions">{ actions.clone() }</div>
                        }
                    </div>
                }
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum Corner {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl Corner {
    fn class(self) -> &'static str {
        match self {
            Corner::TopRight => "glow-top-right",
            Corner::TopLeft => "glow-top-left",
            Corner::BottomRight => "glow-bottom-right",
            Corner::BottomLeft => "glow-bottom-left",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GlowBlobProps {
    pub position: Corner,
    #[prop_or_else(|| AttrValue::from("rgba(37, 99, 235, 0.10)"))]
    pub color: AttrValue,
    #[prop_or(288)]
    pub size: u32,
    #[prop_or(64)]
    pub blur: u32,
}

#[function_component(GlowBlob)]
pub fn glow_blob(props: &GlowBlobProps) -> Html {
    let style = format!(
        "width:{s}px;height:{s}px;background:{c};filter:blur({b}px);",
        s = props.size,
        c = props.color,
        b = props.blur
    );
    html! {
        <div class={classes!("glow-blob", props.position.class())} style={style} aria-hidden="true" />
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum GridAlign {
    #[default]
    Stretch,
    Left,
    Right,
    Center,
}

#[derive(Properties, PartialEq)]
pub struct GridBackgroundProps {
    /// Minor cell size in px.
    #[prop_or(40)]
    pub size: u32,
    #[prop_or(4)]
    pub major_every: u32,
    #[prop_or(0.08)]
    pub minor_opacity: f64,
    #[prop_or(0.18)]
    pub major_opacity: f64,
    /// Width in percent when not stretched.
    #[prop_or(100.0)]
    pub coverage: f64,
    #[prop_or_default]
    pub align: GridAlign,
    #[prop_or(true)]
    pub fade: bool,
}

pub fn grid_wrapper_style(align: GridAlign, coverage: f64) -> String {
    let width = coverage.clamp(0.0, 100.0);
    match align {
        GridAlign::Stretch => "left:0;right:0;".to_string(),
        GridAlign::Left => format!("left:0;width:{width}%;"),
        GridAlign::Right => format!("right:0;width:{width}%;"),
        GridAlign::Center => format!("left:50%;width:{width}%;transform:translateX(-50%);"),
    }
}

/// Square line grid with heavier lines every `major_every` cells.
#[function_component(GridBackground)]
pub fn grid_background(props: &GridBackgroundProps) -> Html {
    let s = props.size;
    let m = s * props.major_every.max(1);
    let minor = format!("rgba(255,255,255,{})", props.minor_opacity);
    let major = format!("rgba(255,255,255,{})", props.major_opacity);
    let grid_style = format!(
        "background-image:linear-gradient({minor} 1px, transparent 1px),linear-gradient(90deg, {minor} 1px, transparent 1px),\
         linear-gradient({major} 1px, transparent 1px),linear-gradient(90deg, {major} 1px, transparent 1px);\
         background-size:{s}px {s}px,{s}px {s}px,{m}px {m}px,{m}px {m}px;"
    );

    html! {
        <div class="grid-background" style={grid_wrapper_style(props.align, props.coverage)} aria-hidden="true">
            <div class="grid-lines" style={grid_style} />
            if props.fade {
                <div class="grid-fade" />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_coverage_is_clamped() {
        assert_eq!(grid_wrapper_style(GridAlign::Left, 140.0), "left:0;width:100%;");
        assert_eq!(grid_wrapper_style(GridAlign::Stretch, 10.0), "left:0;right:0;");
        assert!(grid_wrapper_style(GridAlign::Center, 60.0).contains("translateX(-50%)"));
    }
}
