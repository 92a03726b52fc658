// Adapters layer: concrete backends behind the domain ports.

pub mod firestore;
pub mod http;
pub mod local;
pub mod storage;
pub mod supabase;

pub use firestore::FirestoreProvider;
pub use local::LocalProvider;
pub use storage::LocalStorage;
pub use supabase::SupabaseProvider;
