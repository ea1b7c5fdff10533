//! User management handlers: creation form, submission, listing, edit,
//! update and delete.

use actix_web::{http::header, web, HttpResponse};
use log::{debug, info, warn};

use crate::constants::{
    CTX_USER, CTX_USER_LIST, PATH_FIND_ALL, VIEW_USER_EDIT, VIEW_USER_FORM, VIEW_USER_LIST,
};
use crate::errors::ApiError;
use crate::models::{User, UserForm};
use crate::services::{EntityGateway, UserService};
use crate::views::View;

/// Redirect-after-post back to the list page.
fn redirect_to_list() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, PATH_FIND_ALL))
        .finish()
}

/// Render the creation form with an empty user.
pub async fn show_create_form() -> Result<View, ApiError> {
    View::new(VIEW_USER_FORM).with(CTX_USER, &User::default())
}

/// Persist the submitted user, then redirect to the list.
pub async fn save_user(
    user_service: web::Data<UserService>,
    form: web::Form<UserForm>,
) -> Result<HttpResponse, ApiError> {
    let user = user_service.save(form.into_inner().into()).await?;
    info!("Created user {:?} via form", user.id);
    Ok(redirect_to_list())
}

/// Render every user.
pub async fn find_all_users(user_service: web::Data<UserService>) -> Result<View, ApiError> {
    let users = user_service.find_all().await?;
    View::new(VIEW_USER_LIST).with(CTX_USER_LIST, &users)
}

/// Render the edit form for one user.
pub async fn show_edit_form(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<View, ApiError> {
    let user_id = path.into_inner();
    debug!("Fetching user with id: {}", user_id);

    let user = user_service.find_by_id(user_id).await?.ok_or_else(|| {
        warn!("User not found with id: {}", user_id);
        ApiError::user_not_found()
    })?;

    View::new(VIEW_USER_EDIT).with(CTX_USER, &user)
}

/// Overwrite name and age of an existing user, then redirect to the list.
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
    form: web::Form<UserForm>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    user_service
        .update(user_id, form.into_inner().into())
        .await?;
    Ok(redirect_to_list())
}

/// Delete a user, then redirect to the list.
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    user_service.delete_by_id(path.into_inner()).await?;
    Ok(redirect_to_list())
}
