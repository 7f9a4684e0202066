//! Browser resources the components hold on to. Each one releases what it
//! registered when dropped, so a Yew effect only has to drop it in its
//! destructor.

pub mod animation_loop;
pub mod canvas;
pub mod listeners;
pub mod media;
pub mod observers;
pub mod viewport;

pub use animation_loop::AnimationLoop;
pub use canvas::Canvas;
pub use listeners::{FrameThrottle, WindowListener};
pub use media::{is_desktop, is_mobile, prefers_reduced_motion};
pub use observers::{SizeObserver, VisibilityObserver, VisibilityOptions};
