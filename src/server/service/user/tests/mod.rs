use entity::app_user::UserRole;
use sea_orm::{EntityTrait, PaginatorTrait};
use tipline_test_utils::prelude::*;

use crate::server::{
    error::{auth::AuthError, Error},
    service::{auth::google::GoogleProfile, user::UserService},
};


fn profile(id: &str, email: &str, name: Option<&str>) -> GoogleProfile {
    GoogleProfile {
        id: id.to_string(),
        email: email.to_string(),
        name: name.map(str::to_string),
        picture: None,
    }
}
