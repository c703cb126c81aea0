//! Aggregations over an in-memory list of blogs. Ties always go to the
//! element (or author) seen first in input order.

use std::cmp::Reverse;
use std::collections::HashMap;

use super::blog::Blog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FavoriteBlog {
    pub(crate) title: String,
    pub(crate) author: Option<String>,
    pub(crate) likes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AuthorBlogs {
    pub(crate) author: Option<String>,
    pub(crate) blogs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AuthorLikes {
    pub(crate) author: Option<String>,
    pub(crate) likes: i64,
}

pub(crate) fn total_likes(blogs: &[Blog]) -> i64 {
    blogs.iter().map(|blog| blog.likes).sum()
}

pub(crate) fn favorite_blog(blogs: &[Blog]) -> Option<FavoriteBlog> {
    let favorite = blogs
        .iter()
        .reduce(|best, blog| if blog.likes > best.likes { blog } else { best })?;

    Some(FavoriteBlog {
        title: favorite.title.clone(),
        author: favorite.author.clone(),
        likes: favorite.likes,
    })
}

pub(crate) fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogs> {
    top_author(blogs, |_| 1u64).map(|(author, blogs)| AuthorBlogs { author, blogs })
}

pub(crate) fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    top_author(blogs, |blog| blog.likes).map(|(author, likes)| AuthorLikes { author, likes })
}

/// Sums `weight` per author and returns the author with the largest total.
fn top_author<T, F>(blogs: &[Blog], weight: F) -> Option<(Option<String>, T)>
where
    T: Copy + Ord + std::ops::Add<Output = T>,
    F: Fn(&Blog) -> T,
{
    // author -> (first position, running total)
    let mut totals: HashMap<Option<&str>, (usize, T)> = HashMap::new();
    for (position, blog) in blogs.iter().enumerate() {
        totals
            .entry(blog.author.as_deref())
            .and_modify(|(_, total)| *total = *total + weight(blog))
            .or_insert((position, weight(blog)));
    }

    totals
        .into_iter()
        .max_by_key(|(_, (position, total))| (*total, Reverse(*position)))
        .map(|(author, (_, total))| (author.map(str::to_string), total))
}
