mod instance;
mod part;
mod placement;
mod result;
mod sheet;

#[doc(inline)]
pub use instance::NestInstance;
#[doc(inline)]
pub use instance::PartInstance;
#[doc(inline)]
pub use part::Part;
#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use result::NestResult;
#[doc(inline)]
pub use sheet::Sheet;
