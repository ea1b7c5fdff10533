//! HTML templates for the user pages.

use crate::constants::{CTX_USER, CTX_USER_LIST, PATH_FIND_ALL};
use crate::errors::ApiError;
use crate::models::User;
use crate::utils::escape_html;
use crate::views::{context_entry, page, RenderContext};

fn user_fields(user: &User) -> String {
    format!(
        "<label>Name <input type=\"text\" name=\"name\" value=\"{}\"></label>\n\
         <label>Age <input type=\"number\" name=\"age\" value=\"{}\"></label>\n",
        escape_html(&user.name),
        user.age
    )
}

/// `users/save`: the empty creation form.
pub fn create_form(context: &RenderContext) -> Result<String, ApiError> {
    let user: User = context_entry(context, CTX_USER)?;

    let body = format!(
        "<h1>Add user</h1>\n\
         <form method=\"post\" action=\"/users/save\">\n{}\
         <button type=\"submit\">Save</button>\n</form>\n\
         <a href=\"{}\">All users</a>",
        user_fields(&user),
        PATH_FIND_ALL
    );
    Ok(page("Add user", &body))
}

/// `users/edit`: the form for an existing user, with a delete button.
pub fn edit_form(context: &RenderContext) -> Result<String, ApiError> {
    let user: User = context_entry(context, CTX_USER)?;
    let id = user.id.unwrap_or_default();

    let body = format!(
        "<h1>Edit user {id}</h1>\n\
         <form method=\"post\" action=\"/users/{id}/update\">\n{fields}\
         <button type=\"submit\">Update</button>\n</form>\n\
         <form method=\"post\" action=\"/users/{id}/delete\">\n\
         <button type=\"submit\">Delete</button>\n</form>\n\
         <a href=\"{list}\">All users</a>",
        id = id,
        fields = user_fields(&user),
        list = PATH_FIND_ALL
    );
    Ok(page("Edit user", &body))
}

/// `users/get-all`: a table of every user.
pub fn list(context: &RenderContext) -> Result<String, ApiError> {
    let users: Vec<User> = context_entry(context, CTX_USER_LIST)?;

    let rows: String = users
        .iter()
        .map(|user| {
            let id = user.id.unwrap_or_default();
            format!(
                "<tr><td>{id}</td><td>{name}</td><td>{age}</td>\
                 <td><a href=\"/users/{id}/edit\">Edit</a></td></tr>\n",
                id = id,
                name = escape_html(&user.name),
                age = user.age
            )
        })
        .collect();

    let body = format!(
        "<h1>Users</h1>\n\
         <table>\n<tr><th>ID</th><th>Name</th><th>Age</th><th></th></tr>\n{}</table>\n\
         <a href=\"/users/add\">Add user</a>",
        rows
    );
    Ok(page("Users", &body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CODE_TEMPLATE_ERROR;
    use crate::views::View;

    fn context_with<T: serde::Serialize>(key: &str, value: &T) -> RenderContext {
        View::new("test").with(key, value).unwrap().context().clone()
    }

    #[test]
    fn test_create_form_posts_to_save() {
        let html = create_form(&context_with(CTX_USER, &User::default())).unwrap();
        assert!(html.contains("action=\"/users/save\""));
        assert!(html.contains("name=\"name\" value=\"\""));
        assert!(html.contains("name=\"age\" value=\"0\""));
    }

    #[test]
    fn test_list_renders_each_user_escaped() {
        let users = vec![
            User {
                id: Some(1),
                name: "Alice".to_string(),
                age: 30,
            },
            User {
                id: Some(2),
                name: "<script>".to_string(),
                age: 5,
            },
        ];
        let html = list(&context_with(CTX_USER_LIST, &users)).unwrap();

        assert!(html.contains("<td>1</td><td>Alice</td><td>30</td>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<td><script>"));
        assert!(html.contains("href=\"/users/2/edit\""));
    }

    #[test]
    fn test_list_empty() {
        let html = list(&context_with(CTX_USER_LIST, &Vec::<User>::new())).unwrap();
        assert!(html.contains("<h1>Users</h1>"));
        assert!(!html.contains("<td>"));
    }

    #[test]
    fn test_edit_form_targets_user_routes() {
        let user = User {
            id: Some(7),
            name: "Bob".to_string(),
            age: 40,
        };
        let html = edit_form(&context_with(CTX_USER, &user)).unwrap();
        assert!(html.contains("action=\"/users/7/update\""));
        assert!(html.contains("action=\"/users/7/delete\""));
        assert!(html.contains("value=\"Bob\""));
    }

    #[test]
    fn test_list_requires_user_list_entry() {
        let err = list(&RenderContext::new()).unwrap_err();
        assert_eq!(err.code(), CODE_TEMPLATE_ERROR);
    }
}
