pub mod config;
pub mod constants;
pub mod date_formatter;
pub mod posts;

pub use config::{SiteConfig, SITE};
pub use date_formatter::{format_date, get_month_name, get_year, DateError, FormatOptions};
pub use posts::{get_posts_by_tag, get_sorted_posts, Post};
