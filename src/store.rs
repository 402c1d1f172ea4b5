use crate::entities::Entity;
use crate::error::Result;

/// Get/set access to one kind of entity.
///
/// The indexing runtime implements this once per entity kind; operations only
/// ask for the kinds they read or write. `set` replaces the whole record.
#[allow(async_fn_in_trait)]
pub trait EntityStore<E: Entity> {
    async fn get(&self, id: &str) -> Result<Option<E>>;

    async fn set(&self, entity: E) -> Result<()>;
}
