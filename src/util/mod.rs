pub mod custom_id;
