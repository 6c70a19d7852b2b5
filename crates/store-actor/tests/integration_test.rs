use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use store_actor::{
    ActorEntity, FrameworkError, JsonFileStore, MemoryStore, ResourceActor, Store, StoreError,
};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct SimpleUser {
    id: String,
    name: String,
    logins: u32,
}

#[derive(Debug)]
struct SimpleUserCreate {
    id: String,
    name: String,
}

#[derive(Debug)]
struct SimpleUserUpdate {
    name: String,
}

#[derive(Debug, thiserror::Error)]
enum SimpleUserError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("admin cannot be deleted")]
    Protected,
}

#[async_trait]
impl ActorEntity for SimpleUser {
    type Id = String;
    type Create = SimpleUserCreate;
    type Update = SimpleUserUpdate;
    type Context = ();
    type Error = SimpleUserError;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(params: SimpleUserCreate) -> Result<Self, Self::Error> {
        if params.name.is_empty() {
            return Err(SimpleUserError::EmptyName);
        }
        Ok(Self {
            id: params.id,
            name: params.name,
            logins: 0,
        })
    }

    async fn on_update(
        &mut self,
        update: SimpleUserUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if update.name.is_empty() {
            return Err(SimpleUserError::EmptyName);
        }
        self.name = update.name;
        Ok(())
    }

    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        if self.id == "admin" {
            return Err(SimpleUserError::Protected);
        }
        Ok(())
    }
}

fn create(id: &str, name: &str) -> SimpleUserCreate {
    SimpleUserCreate {
        id: id.to_string(),
        name: name.to_string(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let store = MemoryStore::<SimpleUser>::new();
    let (actor, client) = ResourceActor::<SimpleUser, _>::new(10, store.clone());
    let handle = tokio::spawn(actor.run(()));

    // 1. Create
    let id = client.create(create("u1", "Alice")).await.unwrap();
    assert_eq!(id, "u1");
    assert_eq!(store.snapshot().len(), 1);

    // 2. Get
    let user = client.get(id.clone()).await.unwrap().unwrap();
    assert_eq!(user.name, "Alice");
    assert_eq!(user.logins, 0);

    // 3. Update
    let updated = client
        .update(
            id.clone(),
            SimpleUserUpdate {
                name: "Bob".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Bob");
    assert_eq!(store.snapshot()["u1"].name, "Bob");

    // 4. Delete
    client.delete(id.clone()).await.unwrap();
    assert!(client.get(id.clone()).await.unwrap().is_none());
    assert!(store.snapshot().is_empty());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_duplicate_create_keeps_single_record() {
    let store = MemoryStore::<SimpleUser>::new();
    let (actor, client) = ResourceActor::<SimpleUser, _>::new(10, store.clone());
    tokio::spawn(actor.run(()));

    client.create(create("u1", "Alice")).await.unwrap();
    let result = client.create(create("u1", "Impostor")).await;

    assert!(matches!(result, Err(FrameworkError::AlreadyExists(id)) if id == "u1"));
    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot["u1"].name, "Alice");
}

#[tokio::test]
async fn test_missing_ids_report_not_found() {
    let (actor, client) = ResourceActor::<SimpleUser, _>::new(10, MemoryStore::<SimpleUser>::new());
    tokio::spawn(actor.run(()));

    assert!(client.get("ghost".into()).await.unwrap().is_none());

    let update = client
        .update("ghost".into(), SimpleUserUpdate { name: "X".into() })
        .await;
    assert!(matches!(update, Err(FrameworkError::NotFound(id)) if id == "ghost"));

    let delete = client.delete("ghost".into()).await;
    assert!(matches!(delete, Err(FrameworkError::NotFound(_))));
}

#[tokio::test]
async fn test_hook_failures_leave_collection_untouched() {
    let store = MemoryStore::<SimpleUser>::new();
    let (actor, client) = ResourceActor::<SimpleUser, _>::new(10, store.clone());
    tokio::spawn(actor.run(()));

    // Construction rejects before anything is stored
    let result = client.create(create("u1", "")).await;
    match result {
        Err(FrameworkError::EntityError(e)) => {
            assert!(matches!(
                e.downcast_ref::<SimpleUserError>(),
                Some(SimpleUserError::EmptyName)
            ));
        }
        other => panic!("Expected EntityError, got {other:?}"),
    }
    assert!(store.snapshot().is_empty());

    client.create(create("admin", "Root")).await.unwrap();

    // on_update rejects, stored name is unchanged
    let result = client
        .update("admin".into(), SimpleUserUpdate { name: "".into() })
        .await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));
    assert_eq!(store.snapshot()["admin"].name, "Root");

    // on_delete rejects, record stays
    let result = client.delete("admin".into()).await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));
    assert!(store.snapshot().contains_key("admin"));
}

#[tokio::test]
async fn test_list_returns_records_in_id_order() {
    let (actor, client) = ResourceActor::<SimpleUser, _>::new(10, MemoryStore::<SimpleUser>::new());
    tokio::spawn(actor.run(()));

    for (id, name) in [("c", "Carol"), ("a", "Alice"), ("b", "Bob")] {
        client.create(create(id, name)).await.unwrap();
    }

    let ids: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_json_store_persists_across_actors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");

    let (actor, client) = ResourceActor::<SimpleUser, _>::new(10, JsonFileStore::new(&path));
    let handle = tokio::spawn(actor.run(()));
    client.create(create("u1", "Alice")).await.unwrap();
    drop(client);
    handle.await.unwrap();

    // A fresh actor over the same file sees the record
    let (actor, client) = ResourceActor::<SimpleUser, _>::new(10, JsonFileStore::new(&path));
    tokio::spawn(actor.run(()));
    let user = client.get("u1".into()).await.unwrap().unwrap();
    assert_eq!(user.name, "Alice");
}

#[tokio::test]
async fn test_external_edits_are_visible_without_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    let store = JsonFileStore::new(&path);

    let (actor, client) = ResourceActor::<SimpleUser, _>::new(10, store.clone());
    tokio::spawn(actor.run(()));
    client.create(create("u1", "Alice")).await.unwrap();

    // Rewrite the document behind the actor's back; nothing is cached between requests
    let mut collection = Store::<SimpleUser>::load_all(&store).unwrap();
    collection.get_mut("u1").unwrap().name = "Edited".into();
    store.save_all(&collection).unwrap();

    let user = client.get("u1".into()).await.unwrap().unwrap();
    assert_eq!(user.name, "Edited");
}

#[tokio::test]
async fn test_storage_failures_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "x").unwrap();

    // The parent "directory" is a regular file, so every save fails
    let store = JsonFileStore::new(blocker.join("users.json"));
    let (actor, client) = ResourceActor::<SimpleUser, _>::new(10, store);
    tokio::spawn(actor.run(()));

    let result = client.create(create("u1", "Alice")).await;
    assert!(matches!(
        result,
        Err(FrameworkError::Storage(StoreError::Write { .. }))
    ));
}

#[tokio::test]
async fn test_corrupt_file_fails_reads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let (actor, client) = ResourceActor::<SimpleUser, _>::new(10, JsonFileStore::new(&path));
    tokio::spawn(actor.run(()));

    let result = client.list().await;
    assert!(matches!(
        result,
        Err(FrameworkError::Storage(StoreError::Parse { .. }))
    ));
    // The broken file is left as found
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1, 2, 3]");
}

#[tokio::test]
async fn test_concurrent_creates_are_not_lost() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("users.json"));
    let (actor, client) = ResourceActor::<SimpleUser, _>::new(4, store.clone());
    tokio::spawn(actor.run(()));

    let mut handles = vec![];
    for i in 0..25 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.create(create(&format!("u{i:02}"), "User")).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let collection = Store::<SimpleUser>::load_all(&store).unwrap();
    assert_eq!(collection.len(), 25);
}

#[tokio::test]
async fn test_closed_actor_reports_actor_closed() {
    let (actor, client) = ResourceActor::<SimpleUser, _>::new(10, MemoryStore::<SimpleUser>::new());
    drop(actor);

    let result = client.list().await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
