mod navigator;
mod start_param;

pub use navigator::Navigator;
pub use start_param::StartParamSource;
