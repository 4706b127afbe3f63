use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("io error: {0}")]
  Io(String),

  #[error("backend error: {0}")]
  Backend(String),
}

/// Port de almacenamiento clave-valor duradero.
///
/// Equivale a un `localStorage`: claves y valores son texto. Las
/// implementaciones viven en `dino-storage`; aquí solo hay un doble en memoria.
pub trait KeyValueStore {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
  fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
  fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
    (**self).get(key)
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    (**self).set(key, value)
  }

  fn remove(&self, key: &str) -> Result<(), StoreError> {
    (**self).remove(key)
  }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
    (**self).get(key)
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    (**self).set(key, value)
  }

  fn remove(&self, key: &str) -> Result<(), StoreError> {
    (**self).remove(key)
  }
}

/// Backend en memoria para tests y ejecuciones efímeras.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
  entries: RefCell<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl KeyValueStore for MemoryKeyValueStore {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
    Ok(self.entries.borrow().get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    Ok(())
  }

  fn remove(&self, key: &str) -> Result<(), StoreError> {
    self.entries.borrow_mut().remove(key);
    Ok(())
  }
}
