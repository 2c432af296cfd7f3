/// BlogHub walkthrough
///
/// Exercises the main platform operations end to end:
/// - accounts and categories
/// - authoring and moderation
/// - comments with counters
/// - listing with search, filters, sorting, pagination
/// - dashboard aggregation
use bloghub::core::config::Config;
use bloghub::core::platform::Platform;
use bloghub::core::types::FieldValue;
use bloghub::model::post::{PostDraft, PostStatus};
use bloghub::model::user::{Role, User};
use bloghub::query::descriptor::{QueryDescriptor, SortOrder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("\n=== BlogHub platform demo ===\n");

    let platform = Platform::new(Config::default());

    // Accounts and categories
    let ada = platform.users.add(User::new("ada", "ada@example.com", Role::Admin))?;
    let grace = platform.users.add(User::new("grace", "grace@example.com", Role::User))?;
    platform.users.record_login(ada.id)?;
    platform.categories.add("Rust", "Systems programming, fearlessly")?;
    platform.categories.add("Web Development", "Everything front of the backend")?;
    println!("Seeded {} users, {} categories", platform.users.len(), platform.categories.len());

    // Authoring
    let content = "Lifetimes are how the borrow checker names the spans of time \
                   for which references must stay valid. Most of the time they are \
                   inferred, and the places where they are not tell you something \
                   real about your design."
        .to_string();
    let post = platform.create_post(PostDraft {
        title: "A Field Guide To Lifetimes".to_string(),
        content: content.clone(),
        excerpt: None,
        cover_image: None,
        author_id: ada.id,
        category: "rust".to_string(),
        tags: vec!["rust".to_string(), "borrow-checker".to_string()],
        status: PostStatus::Published,
        featured: true,
    })?;
    println!("\nPublished \"{}\" as /{} ({} min read)", post.title, post.slug, post.reading_time);

    let pending = platform.create_post(PostDraft {
        title: "Why We Rewrote Our Blog Again".to_string(),
        content,
        excerpt: None,
        cover_image: None,
        author_id: grace.id,
        category: "webdev".to_string(),
        tags: vec!["meta".to_string()],
        status: PostStatus::Pending,
        featured: false,
    })?;

    // Moderation
    platform.moderate(pending.id, PostStatus::Published)?;
    println!("Approved \"{}\"", pending.title);

    // Comments
    let comment = platform.publish_comment(post.id, grace.id, "grace", "Sharp as ever.")?;
    platform.reply_to_comment(comment.id, ada.id, "ada", "Thanks!")?;
    println!("Post now carries {} comments", platform.posts.get(post.id).unwrap().comments);

    // Listing
    platform.posts.record_view(post.id)?;
    platform.posts.record_view(post.id)?;
    let listing = platform.posts.list(
        &QueryDescriptor::new()
            .with_search("lifetimes")
            .with_filter("status", FieldValue::text("published"))
            .with_sort("views", SortOrder::Desc)
            .with_page(1, 10),
    );
    println!("\nSearch \"lifetimes\": {} of {} posts", listing.data.len(), listing.total);
    for hit in &listing.data {
        println!("  {:>5} views  {}", hit.views, hit.title);
    }

    // Dashboard
    let stats = platform.dashboard();
    println!("\nDashboard:\n{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}
