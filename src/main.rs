// Headless demo of the PostPulse core: wires the in-memory backends into
// an application store and walks the sign-up / publish / list / paginate /
// stats flow, narrating with structured logs.

use postpulse_core::{
    AppConfig, AppStore, AuthGateway, MemoryIdentityProvider, MemoryPostStore,
    MemorySessionCache, PageItem, PostInput, SignUpRequest, compute_page_items, page_count,
    page_slice,
};
use tracing::info;
use validator::Validate;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    let config = AppConfig::from_env();

    // Create application state with the in-memory backends
    let gateway = AuthGateway::new(
        MemoryIdentityProvider::new(),
        MemorySessionCache::new(config.session_cache_key.clone()),
    );
    let app = AppStore::new(MemoryPostStore::new(), gateway);

    let form = SignUpRequest {
        name: "Demo Author".to_string(),
        email: "author@postpulse.com".to_string(),
        password: "hunter22".to_string(),
        confirm_password: "hunter22".to_string(),
    };
    form.validate().expect("sign-up form must pass validation");
    let author = app.sign_up(form, None).await.expect("sign-up failed");

    // Draft a batch of posts, publishing every other one
    for n in 1..=8 {
        let input = PostInput {
            title: format!("Field notes #{n}"),
            content: format!("Notes from day {n} of the experiment."),
            publish: n % 2 == 0,
        };
        input.validate().expect("post form must pass validation");
        app.create_post(input.into_post_data(&author), None)
            .await
            .expect("create failed");
    }

    app.fetch_posts(Some(&author.uid), None)
        .await
        .expect("fetch failed");
    app.refresh_user_stats();

    let stats = app.user().user_stats;
    info!(
        "Stats for {}: {} total, {} published, {} drafts",
        author.email, stats.total_posts, stats.published_posts, stats.draft_posts
    );

    let posts = app.posts().posts;
    let total_pages = page_count(posts.len(), config.posts_per_page);
    let visible = page_slice(&posts, 1, config.posts_per_page);
    info!(
        "Listing page 1/{} shows {} of {} posts",
        total_pages,
        visible.len(),
        posts.len()
    );

    for item in compute_page_items(1, total_pages) {
        match item {
            PageItem::Page { value, id } => info!("  page button {value} ({id})"),
            PageItem::Ellipsis { id } => info!("  ellipsis ({id})"),
        }
    }

    app.sign_out(None).await.expect("sign-out failed");
    info!("Signed out, session cache cleared");
}
