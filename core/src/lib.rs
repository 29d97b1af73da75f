pub mod error;
pub mod lookup;
pub mod value;

pub use error::{Level, PluckErrorExt};
pub use lookup::Host;
pub use lookup::plugin::{Lookup, LookupMetadata, OptionSpec};
pub use value::{Value, json_to_value, value_to_json, values_to_json_array};

pub fn generate_error_report<E: PluckErrorExt>(error: &E) -> String {
    format!(
        "PLUCK | {} | {} | {}",
        error.level(),
        error.issuer(),
        error.message()
    )
}
