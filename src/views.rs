//! Server-side HTML for the `/posts` pages.
//!
//! Forms can only submit GET or POST, so the edit and delete forms post to a
//! URL carrying `_method`, which `middleware::MethodOverride` turns back into
//! PATCH or DELETE.

use maud::{Markup, DOCTYPE};

use model::Post;

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width,initial-scale=1";
                title { (title) }
            }
            body {
                main { (body) }
            }
        }
    }
}

fn post_path(post: &Post) -> String {
    format!("/posts/{}", post.id())
}

pub fn index(posts: &[Post]) -> Markup {
    layout("Posts", html! {
        h1 { "Posts" }
        p { a href="/posts/new" { "Create new post" } }
        @if posts.is_empty() {
            p { "No posts yet." }
        }
        @for post in posts {
            article.post {
                h3 { "@" (post.username()) }
                p { (post.content()) }
                a href=(post_path(post)) { "See in detail" }
                " "
                a href=(format!("{}/edit", post_path(post))) { "Edit" }
                form method="post" action=(format!("{}?_method=DELETE", post_path(post))) {
                    button type="submit" { "Delete" }
                }
            }
        }
    })
}

pub fn new_form() -> Markup {
    layout("New post", html! {
        h1 { "Create new post" }
        form method="post" action="/posts" {
            input type="text" name="username" placeholder="Enter username";
            br;
            textarea name="content" placeholder="Write your post" {}
            br;
            button type="submit" { "Submit" }
        }
        p { a href="/posts" { "Back to all posts" } }
    })
}

pub fn show(post: &Post) -> Markup {
    layout("Post", html! {
        h1 { "Post in detail" }
        article.post {
            h3 { "@" (post.username()) }
            p { (post.content()) }
            small { "id: " (post.id().to_string()) }
        }
        p { a href="/posts" { "Back to all posts" } }
    })
}

pub fn edit_form(post: &Post) -> Markup {
    layout("Edit post", html! {
        h1 { "Edit post by @" (post.username()) }
        form method="post" action=(format!("{}?_method=PATCH", post_path(post))) {
            textarea name="content" { (post.content()) }
            br;
            button type="submit" { "Edit" }
        }
        p { a href="/posts" { "Back to all posts" } }
    })
}

pub fn not_found() -> Markup {
    layout("Post not found", html! {
        h1 { "Post not found" }
        p { "No post matches that id. " a href="/posts" { "Back to all posts" } }
    })
}
