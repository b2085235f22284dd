//! Building blocks shared by the page views.

mod about_section;
mod features;
mod footer;
mod header;
mod hero;
mod loading;
mod newsletter;
mod product_card;
mod shop_section;

pub use about_section::AboutSection;
pub use features::Features;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use loading::{LOADING_TEXT, Loading};
pub use newsletter::Newsletter;
pub use product_card::ProductCard;
pub use shop_section::{HOME_PREVIEW_LIMIT, ShopSection};
