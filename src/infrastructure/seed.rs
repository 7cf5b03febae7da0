use crate::models::{director, genre, movie};
use sea_orm::*;

/// Insert a small demo catalog. Does nothing if any director already exists.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    if director::Entity::find().count(db).await? > 0 {
        tracing::info!("Database already has data, skipping demo seed");
        return Ok(());
    }

    let txn = db.begin().await?;

    // 1. Directors
    let hitchcock = director::ActiveModel {
        name: Set("Alfred Hitchcock".to_owned()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let kubrick = director::ActiveModel {
        name: Set("Stanley Kubrick".to_owned()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    // 2. Genres
    let thriller = genre::ActiveModel {
        name: Set("Thriller".to_owned()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let science_fiction = genre::ActiveModel {
        name: Set("Science Fiction".to_owned()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    // 3. Movies
    let movies = vec![
        ("Psycho", 1960, 8.5, thriller.id, hitchcock.id),
        ("Vertigo", 1958, 8.3, thriller.id, hitchcock.id),
        ("2001: A Space Odyssey", 1968, 8.3, science_fiction.id, kubrick.id),
    ];

    for (title, year, rating, genre_id, director_id) in movies {
        movie::ActiveModel {
            title: Set(title.to_owned()),
            year: Set(Some(year)),
            rating: Set(Some(rating)),
            genre_id: Set(Some(genre_id)),
            director_id: Set(Some(director_id)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;
    Ok(())
}
