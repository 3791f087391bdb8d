use dioxus::prelude::*;

use crate::user_store::UserStore;

/// Returns the app's account store. Must be called below the component that
/// ran `use_user_store_provider`.
pub fn use_user_store() -> UserStore {
    use_context::<UserStore>()
}
