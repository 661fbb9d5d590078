mod renumber_app;

pub use renumber_app::RenumberApp;
