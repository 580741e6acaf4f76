//! Surface pool sizing validation.

use crate::schema::RecentsConfig;

use super::helpers::validate_range;

pub(crate) fn validate_pool(errors: &mut Vec<String>, config: &RecentsConfig) {
    validate_range(errors, "pool.max_size", config.pool.max_size, 1, 64);
    validate_range(errors, "pool.initial_size", config.pool.initial_size, 0, 64);
    if config.pool.initial_size > config.pool.max_size {
        errors.push(format!(
            "pool.initial_size = {} exceeds pool.max_size = {}",
            config.pool.initial_size, config.pool.max_size
        ));
    }
}
