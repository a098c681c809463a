mod new_subscription;
mod period;
mod price;
mod service_name;
mod subscription;
mod sum_filter;
mod validation_error;

pub use new_subscription::{NewSubscription, SubscriptionData};
pub use period::Period;
pub use price::Price;
pub use service_name::ServiceName;
pub use subscription::Subscription;
pub use sum_filter::{SumFilter, SumParameters};
pub use validation_error::ValidationError;
