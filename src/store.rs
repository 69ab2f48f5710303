// Store module: the customer document model and a small blocking client
// for the MongoDB collection backing the CRM. It is intentionally small
// and synchronous: the menu runs one operation at a time, so a sync
// driver keeps the flow easy to follow.

use anyhow::{Context, Result};
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::sync::{Client, Collection};
use serde::{Deserialize, Serialize};

/// A customer document as stored in the collection. `id` maps to the
/// `_id` field and is assigned by the store on insert.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub age: String,
}

/// Insert/update payload: the user-editable fields of a customer. `age`
/// stays free text, mirroring what the menu reads; nothing in the store
/// validates it as a number.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CustomerFields {
    pub name: String,
    pub age: String,
}

impl Customer {
    /// Merge the stored values with the update prompts. An empty input
    /// keeps the stored value; anything else overwrites it. The check is
    /// on emptiness, not truthiness, so an age of "0" is a real update.
    pub fn apply(&self, name_input: &str, age_input: &str) -> CustomerFields {
        CustomerFields {
            name: if name_input.is_empty() {
                self.name.clone()
            } else {
                name_input.to_string()
            },
            age: if age_input.is_empty() {
                self.age.clone()
            } else {
                age_input.to_string()
            },
        }
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "id: {} -- Name: {}, Age: {}", self.id, self.name, self.age)
    }
}

/// Parse a pasted id into an `ObjectId`. Pure format check, no query is
/// issued, so callers can reject bad input before touching the store.
pub fn parse_id(raw: &str) -> Option<ObjectId> {
    ObjectId::parse_str(raw).ok()
}

/// The store operations the menu needs. `MongoStore` is the real
/// implementation; tests drive the handlers with an in-memory double.
pub trait CustomerStore {
    fn insert(&self, fields: CustomerFields) -> Result<Customer>;
    fn find_all(&self) -> Result<Vec<Customer>>;
    fn find_by_id(&self, id: ObjectId) -> Result<Option<Customer>>;
    fn update_by_id(&self, id: ObjectId, fields: CustomerFields) -> Result<Option<Customer>>;
    fn delete_by_id(&self, id: ObjectId) -> Result<Option<Customer>>;
}

/// Blocking MongoDB-backed store over a single `customers` collection.
pub struct MongoStore {
    client: Client,
    customers: Collection<Customer>,
}

impl MongoStore {
    /// Connect using the `MONGODB_URI` environment variable. A missing
    /// variable or an unreachable server is a startup error; the driver
    /// connects lazily, so we ping once here to surface a bad URI now
    /// instead of on the first menu action. Uses the database named in
    /// the URI, falling back to `crm` when the URI names none.
    pub fn connect() -> Result<Self> {
        let uri = std::env::var("MONGODB_URI").context("MONGODB_URI is not set")?;
        let client =
            Client::with_uri_str(&uri).context("Invalid MongoDB connection string")?;
        let db = client
            .default_database()
            .unwrap_or_else(|| client.database("crm"));
        db.run_command(doc! { "ping": 1 }, None)
            .context("Error connecting to MongoDB")?;
        println!("MongoDB connected successfully.");

        let customers = db.collection::<Customer>("customers");
        Ok(MongoStore { client, customers })
    }

    /// Tear down the connection at exit. The collection handle must go
    /// first so the client can shut down cleanly.
    pub fn close(self) {
        let MongoStore { client, customers } = self;
        drop(customers);
        client.shutdown();
        println!("MongoDB connection closed.");
    }
}

impl CustomerStore for MongoStore {
    fn insert(&self, fields: CustomerFields) -> Result<Customer> {
        let res = self
            .customers
            .clone_with_type::<CustomerFields>()
            .insert_one(&fields, None)?;
        let id = res
            .inserted_id
            .as_object_id()
            .context("Store returned a non-ObjectId key")?;
        Ok(Customer {
            id,
            name: fields.name,
            age: fields.age,
        })
    }

    fn find_all(&self) -> Result<Vec<Customer>> {
        let cursor = self.customers.find(None, None)?;
        let customers = cursor.collect::<mongodb::error::Result<Vec<_>>>()?;
        Ok(customers)
    }

    fn find_by_id(&self, id: ObjectId) -> Result<Option<Customer>> {
        Ok(self.customers.find_one(doc! { "_id": id }, None)?)
    }

    fn update_by_id(&self, id: ObjectId, fields: CustomerFields) -> Result<Option<Customer>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let updated = self.customers.find_one_and_update(
            doc! { "_id": id },
            doc! { "$set": { "name": fields.name, "age": fields.age } },
            options,
        )?;
        Ok(updated)
    }

    fn delete_by_id(&self, id: ObjectId) -> Result<Option<Customer>> {
        Ok(self
            .customers
            .find_one_and_delete(doc! { "_id": id }, None)?)
    }
}
