use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::{
    Client, Collection,
    bson::{Bson, DateTime as BsonDateTime, Document, doc, oid::ObjectId},
    options::ReturnDocument,
};
use serde::{Deserialize, Serialize};
use tokio_stream::StreamExt;

use crate::domain::{
    models::{NewUser, UserAccount, UserChanges},
    repositories::UserRepository,
    value_objects::UserId,
};

/// Opens a driver client and checks that the deployment answers.
pub async fn connect(uri: &str) -> anyhow::Result<Client> {
    let client = Client::with_uri_str(uri)
        .await
        .context("invalid MongoDB connection string")?;
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .context("MongoDB deployment is unreachable")?;
    Ok(client)
}

#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserRecord>,
}

impl MongoUserRepository {
    pub fn new(client: &Client, database: &str, collection: &str) -> Arc<Self> {
        Arc::new(Self {
            collection: client.database(database).collection(collection),
        })
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, user: NewUser) -> anyhow::Result<UserAccount> {
        let now = to_bson_datetime(Utc::now());
        let record = UserRecord {
            id: ObjectId::new(),
            firstname: Bson::String(user.firstname),
            lastname: Bson::String(user.lastname),
            email: Bson::String(user.email),
            dob: Bson::String(user.dob),
            bio: Bson::String(user.bio),
            created_at: Some(now),
            updated_at: Some(now),
        };
        self.collection
            .insert_one(&record)
            .await
            .context("failed to insert user")?;
        Ok(record.into())
    }

    async fn list(&self) -> anyhow::Result<Vec<UserAccount>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .context("failed to query users")?;
        let records = cursor
            .collect::<Result<Vec<UserRecord>, _>>()
            .await
            .context("failed to read users")?;
        Ok(records.into_iter().map(UserAccount::from).collect())
    }

    async fn get(&self, id: &UserId) -> anyhow::Result<Option<UserAccount>> {
        let record = self
            .collection
            .find_one(doc! { "_id": id.object_id() })
            .await
            .with_context(|| format!("failed to fetch user {id}"))?;
        Ok(record.map(UserAccount::from))
    }

    async fn update(&self, id: &UserId, changes: &UserChanges) -> anyhow::Result<Option<UserAccount>> {
        let record = self
            .collection
            .find_one_and_update(
                doc! { "_id": id.object_id() },
                doc! { "$set": set_document(changes, Utc::now()) },
            )
            .return_document(ReturnDocument::After)
            .await
            .with_context(|| format!("failed to update user {id}"))?;
        Ok(record.map(UserAccount::from))
    }

    async fn delete(&self, id: &UserId) -> anyhow::Result<u64> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.object_id() })
            .await
            .with_context(|| format!("failed to delete user {id}"))?;
        Ok(result.deleted_count)
    }

    async fn delete_all(&self) -> anyhow::Result<u64> {
        let result = self
            .collection
            .delete_many(doc! {})
            .await
            .context("failed to delete users")?;
        Ok(result.deleted_count)
    }
}

/// Stored shape of a user. Profile fields are kept as raw BSON so that
/// documents written with numbers, dates or missing fields still read.
#[derive(Debug, Serialize, Deserialize)]
struct UserRecord {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(default)]
    firstname: Bson,
    #[serde(default)]
    lastname: Bson,
    #[serde(default)]
    email: Bson,
    #[serde(default)]
    dob: Bson,
    #[serde(default)]
    bio: Bson,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    created_at: Option<BsonDateTime>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<BsonDateTime>,
}

impl From<UserRecord> for UserAccount {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.id.into(),
            firstname: render_text(value.firstname),
            lastname: render_text(value.lastname),
            email: render_text(value.email),
            dob: render_text(value.dob),
            bio: render_text(value.bio),
            created_at: value.created_at.and_then(from_bson_datetime),
            updated_at: value.updated_at.and_then(from_bson_datetime),
        }
    }
}

/// `$set` body naming only the supplied fields, plus the update timestamp.
fn set_document(changes: &UserChanges, now: DateTime<Utc>) -> Document {
    let mut set: Document = changes
        .fields()
        .map(|(name, value)| (name.to_string(), Bson::String(value.to_string())))
        .collect();
    set.insert("updatedAt", to_bson_datetime(now));
    set
}

/// Text form of a stored profile value; absent values read as empty.
fn render_text(value: Bson) -> String {
    match value {
        Bson::String(text) => text,
        Bson::Null | Bson::Undefined => String::new(),
        Bson::DateTime(date) => date
            .try_to_rfc3339_string()
            .unwrap_or_else(|_| date.to_string()),
        other => other.to_string(),
    }
}

fn to_bson_datetime(value: DateTime<Utc>) -> BsonDateTime {
    BsonDateTime::from_millis(value.timestamp_millis())
}

fn from_bson_datetime(value: BsonDateTime) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis())
}
