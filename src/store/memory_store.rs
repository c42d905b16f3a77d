use async_trait::async_trait;
use tokio::sync::RwLock;

use super::base::TokenStore;
use crate::models::Token;

/// A process-local token store. Used when persistence is disabled and by
/// tests; the token is lost when the process exits.
#[derive(Default)]
pub struct MemoryStore {
    slot: RwLock<Option<Token>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for MemoryStore {
    async fn get(&self) -> Result<Option<Token>, String> {
        Ok(self.slot.read().await.clone())
    }

    async fn set(&self, token: &Token) -> Result<(), String> {
        *self.slot.write().await = Some(token.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), String> {
        *self.slot.write().await = None;
        Ok(())
    }

    fn is_persistent(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_set_get_clear() {
        let store = MemoryStore::new();
        assert_eq!(store.get().await.unwrap(), None);

        store.set(&Token::new("abc")).await.unwrap();
        assert_eq!(store.get().await.unwrap(), Some(Token::new("abc")));

        store.set(&Token::new("def")).await.unwrap();
        assert_eq!(store.get().await.unwrap(), Some(Token::new("def")));

        store.clear().await.unwrap();
        assert_eq!(store.get().await.unwrap(), None);
        assert!(!store.is_persistent());
    }
}
