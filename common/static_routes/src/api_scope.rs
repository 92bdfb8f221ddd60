#[allow(unused_imports)]
use crate::primitives::{Get, Post, Url};
use macros::*;

#[derive(Default)]
pub struct Routes {
    pub health_check: HealthCheck,
    pub login: Login,
}

#[derive(Default, Get)]
pub struct HealthCheck;

impl Url for HealthCheck {
    fn postfix(&self) -> &str {
        "/health_check"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}

#[derive(Default, Post)]
pub struct Login;

impl Url for Login {
    fn postfix(&self) -> &str {
        "/login"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}
