pub mod application {
    pub mod analytics {
        pub mod get_summary;
    }
    pub mod cart {
        pub mod add_item;
        pub mod get;
        pub(crate) mod pricing;
        pub mod remove_item;
        pub mod set_quantity;
    }
    pub mod checkout {
        pub mod check_availability;
        pub mod confirm;
    }
    pub mod delivery_slot {
        pub mod list;
    }
    pub mod order {
        pub mod advance;
        pub mod create;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_history;
    }
    pub mod product {
        pub mod get_all;
        pub mod get_by_id;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod analytics {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod get_summary;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod get;
            pub mod remove_item;
            pub mod set_quantity;
        }
    }
    pub mod checkout {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod check_availability;
            pub mod confirm;
        }
    }
    pub mod delivery_slot {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod selector;
        pub mod use_cases {
            pub mod list;
        }
    }
    pub mod fulfillment {
        pub mod errors;
        pub mod model;
        pub mod splitter;
    }
    pub mod order {
        pub mod errors;
        pub mod history;
        pub mod model;
        pub mod repository;
        pub mod status;
        pub mod use_cases {
            pub mod advance;
            pub mod create;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_history;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod stock;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
