mod helpers;

mod health_check;
mod login;
