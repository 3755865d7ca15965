//! Sample catalog loaded into an empty database at startup.

use chrono::{Duration, NaiveDateTime};

use crate::catalog::CatalogService;
use crate::domain::Video;
use crate::errors::AppError;

fn sample_videos(now: NaiveDateTime) -> Vec<Video> {
    vec![
        Video {
            id: None,
            title: Some("Big Buck Bunny".to_string()),
            description: Some(
                "A large and lovable rabbit fights back against his tormentors".to_string(),
            ),
            video_url: Some(
                "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4"
                    .to_string(),
            ),
            thumbnail_url: Some("https://peach.blender.org/wp-content/uploads/bbb-splash.png".to_string()),
            creator_name: Some("Blender Foundation".to_string()),
            creator_avatar_url: Some("https://via.placeholder.com/40".to_string()),
            duration_seconds: Some(596),
            view_count: 15_000_000,
            created_at: Some(now - Duration::days(7)),
        },
        Video {
            id: None,
            title: Some("Elephant Dream".to_string()),
            description: Some("The first Blender Open Movie from 2006".to_string()),
            video_url: Some(
                "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4"
                    .to_string(),
            ),
            thumbnail_url: Some(
                "https://upload.wikimedia.org/wikipedia/commons/thumb/c/c5/Big_buck_bunny_poster_big.jpg/320px-Big_buck_bunny_poster_big.jpg"
                    .to_string(),
            ),
            creator_name: Some("Orange Open Movie".to_string()),
            creator_avatar_url: Some("https://via.placeholder.com/40".to_string()),
            duration_seconds: Some(653),
            view_count: 8_900_000,
            created_at: Some(now - Duration::days(3)),
        },
    ]
}

/// Inserts the sample videos when the catalog is empty. Returns how many
/// were inserted.
#[tracing::instrument(name = "Seed sample videos", skip(catalog))]
pub async fn seed_sample_videos(
    catalog: &CatalogService,
    now: NaiveDateTime,
) -> Result<usize, AppError> {
    let existing = catalog.list_all().await?.len();
    if existing > 0 {
        tracing::info!(existing, "catalog already populated, skipping seed");
        return Ok(0);
    }

    let samples = sample_videos(now);
    let inserted = samples.len();
    for video in samples {
        catalog.create(video).await?;
    }

    tracing::info!(inserted, "seeded sample videos");
    Ok(inserted)
}
