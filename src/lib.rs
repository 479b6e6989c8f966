pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod intent_outbox;
    }
}

pub mod modules {
    pub mod bookings {
        pub mod core {
            pub mod booking;
            pub mod calendar;
            pub mod contact;
            pub mod intents;
            pub mod overlap;
            pub mod packages;
            pub mod policy;
            pub mod ports;
            pub mod pricing;
            pub mod reservation;
            pub mod slot_index;
            pub mod slots;
        }
        pub mod use_cases {
            pub mod decision;
            pub mod errors;
            pub mod slot_write_lock;
            pub mod check_availability {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod submit_booking {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_bookings {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_booking_status {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod reschedule_booking {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_booking {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_packages {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod booking_store_file;
                pub mod booking_store_in_memory;
                pub mod intent_outbox;
            }
        }
    }
}

pub mod shell;
