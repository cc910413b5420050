pub struct SiteConfig {
    pub website: &'static str,
    pub author: &'static str,
    pub og_image: &'static str,
    pub light_and_dark_mode: bool,
    pub posts_per_index: usize,
    pub posts_per_page: usize,
    pub scheduled_post_margin_in_milliseconds: u64,
    pub show_archives: bool,
    pub show_back_button: bool,
    pub dynamic_og_image: bool,
    /// HTML lang code of the whole site. Also the locale tag handed to the
    /// date formatter, so `"fa"` here switches every rendered date to the
    /// Persian calendar.
    pub lang: &'static str,
    /// Default global timezone, in IANA format.
    pub timezone: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    website: "https://echowane.github.io/CSBLOG",
    author: "Amir Rabiee",
    og_image: "og.png",
    light_and_dark_mode: true,
    posts_per_index: 5,
    posts_per_page: 5,
    scheduled_post_margin_in_milliseconds: 15 * 60 * 1000, // 15 minutes
    show_archives: true,
    show_back_button: true,
    dynamic_og_image: false,
    lang: "fa",
    timezone: "UTC",
};
