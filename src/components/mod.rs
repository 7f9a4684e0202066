//! Reusable UI pieces shared by the pages.

pub mod brand_icon;
pub mod canvas_scene;
pub mod contact_modal;
pub mod footer;
pub mod head;
pub mod marquee;
pub mod modal;
pub mod nav;
pub mod particle_background;
pub mod reveal;
pub mod sand_background;
pub mod scroll_to_top;
pub mod section;
pub mod whatsapp_button;

pub use brand_icon::{ChannelGlyph, TechLogo};
pub use contact_modal::ContactModal;
pub use footer::Footer;
pub use head::{use_page_metadata, JsonLd};
pub use marquee::MarqueeRail;
pub use modal::Modal;
pub use nav::Nav;
pub use particle_background::ParticleBackground;
pub use reveal::Reveal;
pub use sand_background::SandBackground;
pub use scroll_to_top::ScrollToTop;
pub use section::{Corner, GlowBlob, GridAlign, GridBackground, SectionWrapper};
pub use whatsapp_button::WhatsAppButton;
