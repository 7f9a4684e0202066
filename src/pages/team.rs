use yew::prelude::*;

use super::services::section_particles;
use crate::components::{Corner, GlowBlob, ParticleBackground, SectionWrapper};
use crate::content::{SocialGlyph, TeamMember, TEAM};
use crate::icons::{FilledIcon, HeroIcon, Icon};

#[derive(Properties, PartialEq)]
struct AvatarProps {
    name: &'static str,
    initials: String,
    image: Option<&'static str>,
}

/// Round portrait that falls back to initials when the image is missing
/// or fails to load.
#[function_component(Avatar)]
fn avatar(props: &AvatarProps) -> Html {
    let failed = use_state_eq(|| false);
    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    html! {
        <div class="avatar-ring">
            {
                match props.image.filter(|_| !*failed) {
                    Some(src) => html! { <img class="avatar" src={src} alt={props.name} loading="lazy" {onerror} /> },
                    None => html! { <div class="avatar avatar-initials" aria-label={props.name}>{ props.initials.clone() }</div> },
                }
            }
            <div class="avatar-badge" aria-hidden="true">
                <Icon icon={HeroIcon::CodeBracket} class="icon-xs" />
            </div>
        </div>
    }
}

fn member_card(member: &TeamMember) -> Html {
    let socials: Vec<_> = member.visible_socials().collect();
    html! {
        <article key={member.name} class="card team-card">
            <Avatar name={member.name} initials={member.initials()} image={member.image} />
            <div class="team-body">
                <h3>{ member.name }</h3>
                <p class="team-role">{ member.role }</p>
                <p class="text-muted">{ member.description }</p>
                <div class="chip-row">
                    { for member.skills.iter().map(|skill| html! { <span class="chip">{ *skill }</span> }) }
                </div>
                if !socials.is_empty() {
                    <div class="social-row">
                        { for socials.into_iter().map(|(platform, url)| html! {
                            <a class="social-link" href={url} target="_blank" rel="noopener noreferrer"
                                aria-label={platform.label()} title={platform.label()}>
                                {
                                    match platform.glyph() {
                                        SocialGlyph::Filled(path) => html! { <FilledIcon path={path} class="icon-sm" /> },
                                        SocialGlyph::Outline(icon) => html! { <Icon icon={icon} class="icon-sm" /> },
                                    }
                                }
                            </a>
                        }) }
                    </div>
                }
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamSectionProps {
    #[prop_or_else(|| AttrValue::from("team"))]
    pub id: AttrValue,
    #[prop_or_else(|| TEAM.to_vec())]
    pub members: Vec<TeamMember>,
    #[prop_or(true)]
    pub show_glow: bool,
}

#[function_component(TeamSection)]
pub fn team_section(props: &TeamSectionProps) -> Html {
    let decor = html! {
        <>
            if props.show_glow {
                <GlowBlob position={Corner::TopRight} color="rgba(59, 130, 246, 0.25)" size={352} />
                <GlowBlob position={Corner::BottomLeft} color="rgba(14, 165, 233, 0.20)" size={320} />
            }
            <ParticleBackground config={section_particles()} />
        </>
    };

    html! {
        <SectionWrapper
            id={props.id.clone()}
            title="Tim Kami"
            description="Dua programmer berpengalaman yang akan mengerjakan proyek Anda."
            class={classes!("section-dark")}
            title_class={classes!("text-white")}
            description_class={classes!("text-soft")}
            {decor}
        >
            <div class="card-grid two equal-rows">
                { for props.members.iter().map(member_card) }
            </div>
        </SectionWrapper>
    }
}
