use yew::prelude::*;

/// Outline icons (24x24, stroke 1.5) used across the sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroIcon {
    AcademicCap,
    ArrowRight,
    ArrowsPointingOut,
    Bars3,
    ChatBubbleLeftRight,
    Check,
    ChevronUp,
    ClipboardDocument,
    CodeBracket,
    DevicePhoneMobile,
    DocumentText,
    Envelope,
    GlobeAlt,
    MapPin,
    Phone,
    Play,
    Server,
    XMark,
}

impl HeroIcon {
    pub fn path(self) -> &'static str {
        match self {
            HeroIcon::AcademicCap => "M4.26 10.147a60.438 60.438 0 0 0-.491 6.347A48.62 48.62 0 0 1 12 20.904a48.62 48.62 0 0 1 8.232-4.41 60.46 60.46 0 0 0-.491-6.347m-15.482 0a50.636 50.636 0 0 0-2.658-.813A59.906 59.906 0 0 1 12 3.493a59.903 59.903 0 0 1 10.399 5.84c-.896.248-1.783.52-2.658.814m-15.482 0A50.717 50.717 0 0 1 12 13.489a50.702 50.702 0 0 1 7.74-3.342M6.75 15a.75.75 0 1 0 0-1.5.75.75 0 0 0 0 1.5Zm0 0v-3.675A55.378 55.378 0 0 1 12 8.443m-7.007 11.55A5.981 5.981 0 0 0 6.75 15.75v-1.5",
            HeroIcon::ArrowRight => "M13.5 4.5 21 12m0 0-7.5 7.5M21 12H3",
            HeroIcon::ArrowsPointingOut => "M3.75 3.75v4.5m0-4.5h4.5m-4.5 0L9 9M3.75 20.25v-4.5m0 4.5h4.5m-4.5 0L9 15M20.25 3.75h-4.5m4.5 0v4.5m0-4.5L15 9m5.25 11.25h-4.5m4.5 0v-4.5m0 4.5L15 15",
            HeroIcon::Bars3 => "M3.75 6.75h16.5M3.75 12h16.5m-16.5 5.25h16.5",
            HeroIcon::ChatBubbleLeftRight => "M20.25 8.511c.884.284 1.5 1.128 1.5 2.097v4.286c0 1.136-.847 2.1-1.98 2.193-.34.027-.68.052-1.02.072v3.091l-3-3c-1.354 0-2.694-.055-4.02-.163a2.115 2.115 0 0 1-.825-.242m9.345-8.334a2.126 2.126 0 0 0-.476-.095 48.64 48.64 0 0 0-8.048 0c-1.131.094-1.976 1.057-1.976 2.192v4.286c0 .837.46 1.58 1.155 1.951m9.345-8.334V6.637c0-1.621-1.152-3.026-2.76-3.235A48.455 48.455 0 0 0 11.25 3c-2.115 0-4.198.137-6.24.402-1.608.209-2.76 1.614-2.76 3.235v6.226c0 1.621 1.152 3.026 2.76 3.235.577.075 1.157.14 1.74.194V21l4.155-4.155",
            HeroIcon::Check => "m4.5 12.75 6 6 9-13.5",
            HeroIcon::ChevronUp => "m4.5 15.75 7.5-7.5 7.5 7.5",
            HeroIcon::ClipboardDocument => "M8.25 7.5V6.108c0-1.135.845-2.098 1.976-2.192.373-.03.748-.057 1.123-.08M15.75 18H18a2.25 2.25 0 0 0 2.25-2.25V6.108c0-1.135-.845-2.098-1.976-2.192a48.424 48.424 0 0 0-1.123-.08M15.75 18.75v-1.875a3.375 3.375 0 0 0-3.375-3.375h-1.5a1.125 1.125 0 0 1-1.125-1.125v-1.5A3.375 3.375 0 0 0 6.375 7.5H5.25m11.9-3.664A2.251 2.251 0 0 0 15 2.25h-1.5a2.251 2.251 0 0 0-2.15 1.586m5.8 0c.065.21.1.433.1.664v.75h-6V4.5c0-.231.035-.454.1-.664M6.75 7.5H4.875c-.621 0-1.125.504-1.125 1.125v12c0 .621.504 1.125 1.125 1.125h9.75c.621 0 1.125-.504 1.125-1.125V16.5a9 9 0 0 0-9-9Z",
            HeroIcon::CodeBracket => "M17.25 6.75 22.5 12l-5.25 5.25m-10.5 0L1.5 12l5.25-5.25m7.5-3-4.5 16.5",
            HeroIcon::DevicePhoneMobile => "M10.5 1.5H8.25A2.25 2.25 0 0 0 6 3.75v16.5a2.25 2.25 0 0 0 2.25 2.25h7.5A2.25 2.25 0 0 0 18 20.25V3.75a2.25 2.25 0 0 0-2.25-2.25H13.5m-3 0V3h3V1.5m-3 0h3m-3 18.75h3",
            HeroIcon::DocumentText => "M19.5 14.25v-2.625a3.375 3.375 0 0 0-3.375-3.375h-1.5A1.125 1.125 0 0 1 13.5 7.125v-1.5a3.375 3.375 0 0 0-3.375-3.375H8.25m0 12.75h7.5m-7.5 3H12M10.5 2.25H5.625c-.621 0-1.125.504-1.125 1.125v17.25c0 .621.504 1.125 1.125 1.125h12.75c.621 0 1.125-.504 1.125-1.125V11.25a9 9 0 0 0-9-9Z",
            HeroIcon::Envelope => "M21.75 6.75v10.5a2.25 2.25 0 0 1-2.25 2.25h-15a2.25 2.25 0 0 1-2.25-2.25V6.75m19.5 0A2.25 2.25 0 0 0 19.5 4.5h-15a2.25 2.25 0 0 0-2.25 2.25m19.5 0v.243a2.25 2.25 0 0 1-1.07 1.916l-7.5 4.615a2.25 2.25 0 0 1-2.36 0L3.32 8.91a2.25 2.25 0 0 1-1.07-1.916V6.75",
            HeroIcon::GlobeAlt => "M12 21a9.004 9.004 0 0 0 8.716-6.747M12 21a9.004 9.004 0 0 1-8.716-6.747M12 21c2.485 0 4.5-4.03 4.5-9S14.485 3 12 3m0 18c-2.485 0-4.5-4.03-4.5-9S9.515 3 12 3m0 0a8.997 8.997 0 0 1 7.843 4.582M12 3a8.997 8.997 0 0 0-7.843 4.582m15.686 0A11.953 11.953 0 0 1 12 10.5c-2.998 0-5.74-1.1-7.843-2.918m15.686 0A8.959 8.959 0 0 1 21 12c0 .778-.099 1.533-.284 2.253m0 0A17.919 17.919 0 0 1 12 16.5c-3.162 0-6.133-.815-8.716-2.247m0 0A9.015 9.015 0 0 1 3 12c0-1.605.42-3.113 1.157-4.418",
            HeroIcon::MapPin => "M15 10.5a3 3 0 1 1-6 0 3 3 0 0 1 6 0Z M19.5 10.5c0 7.142-7.5 11.25-7.5 11.25S4.5 17.642 4.5 10.5a7.5 7.5 0 1 1 15 0Z",
            HeroIcon::Phone => "M2.25 6.75c0 8.284 6.716 15 15 15h2.25a2.25 2.25 0 0 0 2.25-2.25v-1.372c0-.516-.351-.966-.852-1.091l-4.423-1.106c-.44-.11-.902.055-1.173.417l-.97 1.293c-.282.376-.769.542-1.21.38a12.035 12.035 0 0 1-7.143-7.143c-.162-.441.004-.928.38-1.21l1.293-.97c.363-.271.527-.734.417-1.173L6.963 3.102a1.125 1.125 0 0 0-1.091-.852H4.5A2.25 2.25 0 0 0 2.25 4.5v2.25Z",
            HeroIcon::Play => "M5.25 5.653c0-.856.917-1.398 1.667-.986l11.54 6.347a1.125 1.125 0 0 1 0 1.972l-11.54 6.347a1.125 1.125 0 0 1-1.667-.986V5.653Z",
            HeroIcon::Server => "M21.75 17.25v-.228a4.5 4.5 0 0 0-.12-1.03l-2.268-9.64a3.375 3.375 0 0 0-3.285-2.602H7.923a3.375 3.375 0 0 0-3.285 2.602l-2.268 9.64a4.5 4.5 0 0 0-.12 1.03v.228m19.5 0a3 3 0 0 1-3 3H5.25a3 3 0 0 1-3-3m19.5 0a3 3 0 0 0-3-3H5.25a3 3 0 0 0-3 3m16.5 0h.008v.008h-.008v-.008Zm-3 0h.008v.008h-.008v-.008Z",
            HeroIcon::XMark => "M6 18 18 6M6 6l12 12",
        }
    }
}

pub const STAR_PATH: &str = "M10.788 3.21c.448-1.077 1.976-1.077 2.424 0l2.082 5.006 5.404.434c1.164.093 1.636 1.545.749 2.305l-4.117 3.527 1.257 5.273c.271 1.136-.964 2.033-1.96 1.425L12 18.354 7.373 21.18c-.996.608-2.231-.29-1.96-1.425l1.257-5.273-4.117-3.527c-.887-.76-.415-2.212.749-2.305l5.404-.434 2.082-5.005Z";

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: HeroIcon,
    #[prop_or_else(|| AttrValue::from("icon"))]
    pub class: AttrValue,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.to_string()} viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="1.5" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" d={props.icon.path()} />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct FilledIconProps {
    pub path: &'static str,
    #[prop_or_else(|| AttrValue::from("icon"))]
    pub class: AttrValue,
}

#[function_component(FilledIcon)]
pub fn filled_icon(props: &FilledIconProps) -> Html {
    html! {
        <svg class={props.class.to_string()} viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d={props.path} />
        </svg>
    }
}

pub const GITHUB_PATH: &str = "M12 .5a12 12 0 0 0-3.79 23.4c.6.11.82-.26.82-.58l-.01-2.03c-3.34.73-4.04-1.61-4.04-1.61-.55-1.39-1.35-1.76-1.35-1.76-1.1-.75.08-.73.08-.73 1.22.09 1.86 1.26 1.86 1.26 1.08 1.85 2.83 1.31 3.52 1 .11-.79.42-1.31.76-1.61-2.66-.3-5.47-1.33-5.47-5.93 0-1.31.47-2.38 1.25-3.22-.13-.31-.54-1.56.12-3.25 0 0 1.01-.32 3.3 1.23a11.43 11.43 0 0 1 6.01 0c2.28-1.55 3.29-1.23 3.29-1.23.66 1.69.25 2.94.12 3.25.78.84 1.25 1.91 1.25 3.22 0 4.61-2.81 5.63-5.49 5.93.43.37.82 1.1.82 2.22l-.01 3.29c0 .32.22.7.83.58A12 12 0 0 0 12 .5Z";
pub const LINKEDIN_PATH: &str = "M4.98 3.5C4.98 4.88 3.86 6 2.5 6S0 4.88 0 3.5 1.12 1 2.5 1s2.48 1.12 2.48 2.5ZM.5 8.5h4V23h-4V8.5Zm7 0h3.83v2h.05c.53-1 1.83-2.05 3.77-2.05C19.5 8.45 21 10.6 21 14.06V23h-4v-7.66c0-1.83-.03-4.18-2.55-4.18-2.55 0-2.94 1.99-2.94 4.05V23h-4V8.5Z";
pub const X_PATH: &str = "M18.244 2H21l-6.5 7.43L22 22h-6.766l-4.51-5.89L5.5 22H3l6.963-7.963L2 2h6.85l4.078 5.43L18.244 2Zm-1.186 18h1.64L7.03 3.9H5.29L17.058 20Z";
pub const INSTAGRAM_PATH: &str = "M12 2.2c3.2 0 3.584.012 4.85.07 1.17.054 1.95.24 2.4.4.6.23 1.03.5 1.48.95.45.45.72.88.95 1.48.16.45.35 1.23.4 2.4.06 1.27.07 1.65.07 4.85s-.01 3.584-.07 4.85c-.05 1.17-.24 1.95-.4 2.4-.23.6-.5 1.03-.95 1.48-.45.45-.88.72-1.48.95-.45.16-1.23.35-2.4.4-1.27.06-1.65.07-4.85.07s-3.584-.01-4.85-.07c-1.17-.05-1.95-.24-2.4-.4-.6-.23-1.03-.5-1.48-.95-.45-.45-.72-.88-.95-1.48-.16-.45-.35-1.23-.4-2.4C2.21 15.58 2.2 15.2 2.2 12s.01-3.584.07-4.85c.05-1.17.24-1.95.4-2.4.23-.6.5-1.03.95-1.48.45-.45.88-.72 1.48-.95.45-.16 1.23-.35 2.4-.4C8.42 2.21 8.8 2.2 12 2.2Zm0 1.6c-3.15 0-3.52.012-4.76.07-1.03.047-1.59.22-1.96.37-.49.19-.83.42-1.2.8-.38.37-.61.71-.8 1.2-.15.37-.32.93-.37 1.96-.06 1.24-.07 1.6-.07 4.76s.012 3.52.07 4.76c.047 1.03.22 1.59.37 1.96.19.49.42.83.8 1.2.37.38.71.61 1.2.8.37.15.93.32 1.96.37 1.24.06 1.6.07 4.76.07s3.52-.012 4.76-.07c1.03-.047 1.59-.22 1.96-.37.49-.19.83-.42 1.2-.8.38-.37.61-.71.8-1.2.15-.37.32-.93.37-1.96.06-1.24.07-1.6.07-4.76s-.012-3.52-.07-4.76c-.047-1.03-.22-1.59-.37-1.96a3.37 3.37 0 0 0-.8-1.2 3.37 3.37 0 0 0-1.2-.8c-.37-.15-.93-.32-1.96-.37-1.24-.06-1.6-.07-4.76-.07Zm0 3.2a5.8 5.8 0 1 1 0 11.6 5.8 5.8 0 0 1 0-11.6Zm0 1.6a4.2 4.2 0 1 0 0 8.4 4.2 4.2 0 0 0 0-8.4Zm5.9-2.3a1.4 1.4 0 1 1 0 2.8 1.4 1.4 0 0 1 0-2.8Z";
pub const FACEBOOK_PATH: &str = "M22 12a10 10 0 1 0-11.57 9.87v-6.99H7.9V12h2.53V9.8c0-2.5 1.49-3.88 3.77-3.88 1.09 0 2.24.2 2.24.2v2.46h-1.26c-1.24 0-1.63.77-1.63 1.56V12h2.78l-.44 2.88h-2.34v6.99A10 10 0 0 0 22 12Z";
pub const DRIBBBLE_PATH: &str = "M12 2a10 10 0 1 0 .001 20.001A10 10 0 0 0 12 2Zm6.78 5.23a8.39 8.39 0 0 1 1.67 5.06c-1.29-.27-2.93-.3-4.82-.08-.08-.2-.15-.41-.24-.61-.27-.63-.6-1.26-.95-1.87 2.2-1 3.75-2.28 4.34-2.5ZM12 3.6c1.85 0 3.55.63 4.9 1.69-.5.71-1.86 2.34-4.23 3.4-1.12-2.06-2.38-3.84-2.77-4.36A8.33 8.33 0 0 1 12 3.6Zm-3.9 1.14c.38.5 1.69 2.3 2.84 4.43-3.01.8-5.9.82-6.56.8a8.42 8.42 0 0 1 3.72-5.23ZM3.6 12.01c0-.2 0-.4.02-.6.71.02 4.35.03 7.72-.98.26.46.5.93.73 1.41-.12.04-.24.08-.36.13-3.82 1.46-5.86 4.2-6.37 4.88A8.36 8.36 0 0 1 3.6 12Zm8.41 8.39a8.35 8.35 0 0 1-5.03-1.7c.44-.7 2.29-3.39 6.34-5.01.05-.02.1-.04.15-.05.78 2.02 1.25 4.29 1.44 5.27a8.3 8.3 0 0 1-2.9-.5Zm4.2-1.88c-.16-.83-.58-2.76-1.28-4.72 1.7-.2 3.21-.17 4.43.07a8.4 8.4 0 0 1-3.15 4.65Z";
pub const BEHANCE_PATH: &str = "M9.15 10.02c.8-.38 1.2-1.01 1.2-1.99 0-2-1.47-2.53-3.31-2.53H2v8.99h5.08c2.11 0 3.55-.97 3.55-2.91 0-1.28-.6-2.15-1.48-2.56ZM4.2 6.95H6.7c.8 0 1.44.22 1.44 1.04 0 .88-.66 1.1-1.46 1.1H4.2V6.95Zm2.64 6.42H4.2v-2.5h2.7c.98 0 1.63.32 1.63 1.25 0 1.01-.75 1.25-1.69 1.25ZM21.99 10.5C21.7 8.3 19.97 7 17.9 7c-2.73 0-4.58 1.95-4.58 4.53 0 2.7 1.89 4.62 4.65 4.62 2.24 0 3.86-1.08 4.3-3h-2.12c-.26.85-1.08 1.24-2.1 1.24-1.24 0-2.08-.7-2.23-1.86h6.16c.03-.22.05-.44.05-.66 0-.14 0-.27-.04-.37Zm-6.24-1.1c.16-1 .95-1.58 1.98-1.58 1.04 0 1.8.6 1.93 1.58h-3.91ZM16 5.2h4v1.2h-4V5.2Z";
pub const YOUTUBE_PATH: &str = "M23.5 7.2s-.23-1.7-.9-2.45c-.86-.97-1.83-.98-2.27-1.03C17.5 3.5 12 3.5 12 3.5h-.01s-5.5 0-8.32.22c-.44.05-1.41.06-2.27 1.03-.67.75-.9 2.45-.9 2.45S0 9.2 0 11.17v1.65c0 1.97.23 3.97.23 3.97s.23 1.7.9 2.45c.86.97 2 .94 2.51 1.05 1.82.18 7.36.24 7.36.24s5.5-.01 8.33-.23c.44-.05 1.41-.06 2.27-1.03.67-.75.9-2.45.9-2.45s.23-2 .23-3.97v-1.65c0-1.97-.23-3.97-.23-3.97ZM9.6 14.9V8.6l6.02 3.16L9.6 14.9Z";
pub const WHATSAPP_PATH: &str = "M17.472 14.382c-.297-.149-1.758-.867-2.03-.967-.273-.099-.471-.148-.67.15-.197.297-.767.966-.94 1.164-.173.199-.347.223-.644.075-.297-.15-1.255-.463-2.39-1.475-.883-.788-1.48-1.761-1.653-2.059-.173-.297-.018-.458.13-.606.134-.133.298-.347.446-.52.149-.174.198-.298.298-.497.099-.198.05-.371-.025-.52-.075-.149-.669-1.612-.916-2.207-.242-.579-.487-.5-.669-.51-.173-.008-.371-.01-.57-.01-.198 0-.52.074-.792.372-.272.297-1.04 1.016-1.04 2.479 0 1.462 1.065 2.875 1.213 3.074.149.198 2.096 3.2 5.077 4.487.709.306 1.262.489 1.694.625.712.227 1.36.195 1.871.118.571-.085 1.758-.719 2.006-1.413.248-.694.248-1.289.173-1.413-.074-.124-.272-.198-.57-.347m-5.421 7.403h-.004a9.87 9.87 0 0 1-5.031-1.378l-.361-.214-3.741.982.998-3.648-.235-.374a9.86 9.86 0 0 1-1.51-5.26c.001-5.45 4.436-9.884 9.888-9.884 2.64 0 5.122 1.03 6.988 2.898a9.825 9.825 0 0 1 2.893 6.994c-.003 5.45-4.437 9.884-9.885 9.884m8.413-18.297A11.815 11.815 0 0 0 12.05 0C5.495 0 .16 5.335.157 11.892c0 2.096.547 4.142 1.588 5.945L.057 24l6.305-1.654a11.882 11.882 0 0 0 5.683 1.448h.005c6.554 0 11.89-5.335 11.893-11.893a11.821 11.821 0 0 0-3.48-8.413Z";
pub const TELEGRAM_PATH: &str = "M11.944 0A12 12 0 0 0 0 12a12 12 0 0 0 12 12 12 12 0 0 0 12-12A12 12 0 0 0 12 0a12 12 0 0 0-.056 0zm4.962 7.224c.1-.002.321.023.465.14a.506.506 0 0 1 .171.325c.016.093.036.306.02.472-.18 1.898-.962 6.502-1.36 8.627-.168.9-.499 1.201-.82 1.23-.696.065-1.225-.46-1.9-.902-1.056-.693-1.653-1.124-2.678-1.8-1.185-.78-.417-1.21.258-1.91.177-.184 3.247-2.977 3.307-3.23.007-.032.014-.15-.056-.212s-.174-.041-.249-.024c-.106.024-1.793 1.14-5.061 3.345-.48.33-.913.49-1.302.48-.428-.008-1.252-.241-1.865-.44-.752-.245-1.349-.374-1.297-.789.027-.216.325-.437.893-.663 3.498-1.524 5.83-2.529 6.998-3.014 3.332-1.386 4.025-1.627 4.476-1.635z";
