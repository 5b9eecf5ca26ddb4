//! Runs against a live deployment:
//! `MONGODB_URI=mongodb://localhost:27017 cargo test -- --ignored`

use mongodb::bson::{Document, oid::ObjectId};
use user_accounts::{
    domain::{
        models::{NewUser, UserChanges},
        repositories::UserRepository,
        value_objects::UserId,
    },
    infrastructure::repositories::mongo::{self, MongoUserRepository},
};

const DATABASE: &str = "user_accounts_test";

#[tokio::test]
#[ignore = "requires a MongoDB deployment at MONGODB_URI"]
async fn crud_round_trip() {
    let uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    let client = mongo::connect(&uri).await.unwrap();
    let collection = format!("users_{}", ObjectId::new());
    let repo = MongoUserRepository::new(&client, DATABASE, &collection);

    let created = repo
        .insert(NewUser {
            firstname: "A".into(),
            lastname: "B".into(),
            email: "a@b.com".into(),
            dob: "2000-01-01".into(),
            bio: "x".into(),
        })
        .await
        .unwrap();
    assert_eq!(repo.get(&created.id).await.unwrap(), Some(created.clone()));

    let updated = repo
        .update(
            &created.id,
            &UserChanges {
                bio: Some("y".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(updated.bio, "y");
    assert_eq!(updated.firstname, created.firstname);
    assert_eq!(updated.created_at, created.created_at);

    let missing = UserId::generate();
    assert!(repo.get(&missing).await.unwrap().is_none());
    assert!(
        repo.update(&missing, &UserChanges {
            bio: Some("z".into()),
            ..Default::default()
        })
        .await
        .unwrap()
        .is_none()
    );
    assert_eq!(repo.delete(&missing).await.unwrap(), 0);

    assert_eq!(repo.list().await.unwrap(), vec![updated]);
    assert_eq!(repo.delete(&created.id).await.unwrap(), 1);
    assert_eq!(repo.delete_all().await.unwrap(), 0);

    client
        .database(DATABASE)
        .collection::<Document>(&collection)
        .drop()
        .await
        .unwrap();
    client.shutdown().await;
}
