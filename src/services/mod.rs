pub mod route_assembler;
#[cfg(target_arch = "wasm32")]
pub mod route_api;
#[cfg(target_arch = "wasm32")]
pub mod route_service;

pub use route_assembler::RouteAssembler;
#[cfg(target_arch = "wasm32")]
pub use route_api::SearchRouteApi;
#[cfg(target_arch = "wasm32")]
pub use route_service::RouteService;
