/// Platform configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub featured_limit: usize,        // posts on the front-page carousel
    pub category_page_size: usize,    // posts per category shelf
    pub top_posts_limit: usize,       // dashboard "top posts" table
    pub trailing_months: usize,       // dashboard time-series window
    pub excerpt_length: usize,        // derived excerpt, in characters
    pub reading_wpm: usize,           // reading-time estimate
    pub validation: ValidationLimits,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            featured_limit: 5,
            category_page_size: 10,
            top_posts_limit: 5,
            trailing_months: 6,
            excerpt_length: 150,
            reading_wpm: 200,
            validation: ValidationLimits::default(),
        }
    }
}

/// Input limits enforced by `text::validate`
#[derive(Debug, Clone)]
pub struct ValidationLimits {
    pub username_min: usize,
    pub username_max: usize,
    pub title_min: usize,
    pub title_max: usize,
    pub excerpt_max: usize,
    pub content_min: usize,
    pub tag_max: usize,          // characters per tag
    pub max_tags: usize,
    pub comment_max: usize,
    pub category_name_max: usize,
    pub bio_max: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        ValidationLimits {
            username_min: 3,
            username_max: 20,
            title_min: 5,
            title_max: 200,
            excerpt_max: 300,
            content_min: 100,
            tag_max: 20,
            max_tags: 10,
            comment_max: 1000,
            category_name_max: 50,
            bio_max: 500,
        }
    }
}
