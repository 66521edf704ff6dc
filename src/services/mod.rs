mod work_service;

pub use work_service::WorkService;
