pub mod inspect;
pub mod viewer;

pub use inspect::HeaderReport;
pub use viewer::ViewService;
