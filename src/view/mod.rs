pub mod state;

pub use state::{Generation, MapView, RequestToken, Selection, ViewState};
