pub mod modules {
    pub mod activities {
        pub mod core {
            pub mod activity;
            pub mod errors;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod list_activities {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod sign_up_for_activity {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod unregister_from_activity {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_responses;
            }
            pub mod outbound {
                pub mod activity_roster;
                pub mod activity_roster_in_memory;
            }
        }
    }
}

pub mod shell;
