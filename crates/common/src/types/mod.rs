use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of the shop services a process is running as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Customer,
    Order,
    Product,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 3] = [ServiceKind::Customer, ServiceKind::Order, ServiceKind::Product];

    /// Name reported by `/health` and used as the `service` log field.
    pub fn service_name(self) -> &'static str {
        match self {
            ServiceKind::Customer => "customer-service",
            ServiceKind::Order => "order-service",
            ServiceKind::Product => "product-service",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ServiceKind::Customer => "Customer",
            ServiceKind::Order => "Order",
            ServiceKind::Product => "Product",
        }
    }

    /// Collection path segment, e.g. `customers` in `/customers/{id}`.
    pub fn resource(self) -> &'static str {
        match self {
            ServiceKind::Customer => "customers",
            ServiceKind::Order => "orders",
            ServiceKind::Product => "products",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            ServiceKind::Product => 8000,
            ServiceKind::Customer => 8001,
            ServiceKind::Order => 8002,
        }
    }

    pub fn welcome_message(self) -> String {
        format!("Welcome to the {} Service!", self.display_name())
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.service_name())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
}

impl Health {
    pub fn ok(kind: ServiceKind) -> Self {
        Self { status: "ok", service: kind.service_name() }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Welcome {
    pub message: String,
}
