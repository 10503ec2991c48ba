use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;
use yew::prelude::*;

/// Fixed localStorage key under which a value type is stored.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalOrDefault: Sized {
    /// Read the stored value, surfacing storage and parse failures.
    fn local_load() -> Result<Self, StorageError>;

    /// Read the stored value, falling back to defaults. A missing key is the
    /// normal first-run case; anything else is worth a warning.
    fn local_or_default() -> Self;

    /// Write-and-forget; a failed write only logs.
    fn local_save(&self);
}

impl<T> LocalOrDefault for T
where
    T: StorageKey + Serialize + DeserializeOwned + Default,
{
    fn local_load() -> Result<Self, StorageError> {
        LocalStorage::get(Self::KEY)
    }

    fn local_or_default() -> Self {
        match Self::local_load() {
            Ok(value) => value,
            Err(StorageError::KeyNotFound(_)) => Self::default(),
            Err(err) => {
                log::warn!("could not load {}: {:?}, using defaults", Self::KEY, err);
                Self::default()
            }
        }
    }

    fn local_save(&self) {
        if let Err(err) = LocalStorage::set(Self::KEY, self) {
            log::error!("could not save {} to local storage: {:?}", Self::KEY, err);
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub children: Html,
}

/// Helper component to attach the contents onto document.body instead of in the place where it's used.
#[function_component]
pub(crate) fn Modal(props: &ModalProps) -> Html {
    let modal_host = gloo::utils::body();
    create_portal(props.children.clone(), modal_host.into())
}
