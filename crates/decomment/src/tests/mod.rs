
mod filter_good;
mod property_idempotent;
