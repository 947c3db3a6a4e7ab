//! Site model - the sorted, immutable view of all content for one build
//!
//! Everything derived from the content (recent posts, featured projects,
//! prev/next links and the search index) is computed once in
//! [`SiteModel::build`]. Nothing is mutated afterwards, so the generator
//! only ever reads from it.

use serde::Serialize;

use crate::config::Limits;
use crate::content::{Post, Project};

/// Adjacent posts in sorted order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbors {
    /// Index of the newer post
    pub prev: Option<usize>,
    /// Index of the older post
    pub next: Option<usize>,
}

/// One record of search.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub date: String,
    pub tags: Vec<String>,
    pub read_time_minutes: u32,
}

impl From<&Post> for SearchEntry {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            slug: post.slug.clone(),
            description: post.description.clone(),
            date: post.date.clone(),
            tags: post.tags.clone(),
            read_time_minutes: post.read_time_minutes,
        }
    }
}

/// A post together with its neighbours
#[derive(Debug, Clone, Copy)]
pub struct PostPage<'a> {
    pub post: &'a Post,
    pub prev: Option<&'a Post>,
    pub next: Option<&'a Post>,
}

/// All content for one build
#[derive(Debug, Clone)]
pub struct SiteModel {
    posts: Vec<Post>,
    projects: Vec<Project>,
    navigation: Vec<Neighbors>,
    recent_len: usize,
    featured: Vec<usize>,
    search_index: Vec<SearchEntry>,
}

impl SiteModel {
    /// Sort posts and derive every index
    ///
    /// Posts are ordered newest first. The sort is stable, so posts sharing a
    /// date (or all lacking one) keep the order they were read in.
    pub fn build(mut posts: Vec<Post>, projects: Vec<Project>, limits: &Limits) -> Self {
        posts.sort_by(|a, b| b.sort_date().cmp(&a.sort_date()));

        let navigation = (0..posts.len())
            .map(|i| Neighbors {
                prev: i.checked_sub(1),
                next: (i + 1 < posts.len()).then_some(i + 1),
            })
            .collect();

        let recent_len = posts.len().min(limits.recent_posts);

        let featured = projects
            .iter()
            .enumerate()
            .filter(|(_, p)| p.featured)
            .map(|(i, _)| i)
            .take(limits.featured_projects)
            .collect();

        let search_index = posts.iter().map(SearchEntry::from).collect();

        Self {
            posts,
            projects,
            navigation,
            recent_len,
            featured,
            search_index,
        }
    }

    /// Posts, newest first
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Projects, in filename order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn recent_posts(&self) -> &[Post] {
        &self.posts[..self.recent_len]
    }

    pub fn featured_projects(&self) -> Vec<&Project> {
        self.featured.iter().map(|&i| &self.projects[i]).collect()
    }

    pub fn search_index(&self) -> &[SearchEntry] {
        &self.search_index
    }

    /// Neighbour indices of the post at `index`
    pub fn neighbors(&self, index: usize) -> Neighbors {
        self.navigation.get(index).copied().unwrap_or_default()
    }

    /// The post at `index` with its prev/next posts resolved
    pub fn post_page(&self, index: usize) -> Option<PostPage<'_>> {
        let post = self.posts.get(index)?;
        let nav = self.neighbors(index);
        Some(PostPage {
            post,
            prev: nav.prev.map(|i| &self.posts[i]),
            next: nav.next.map(|i| &self.posts[i]),
        })
    }

    /// Every post page in sorted order
    pub fn post_pages(&self) -> impl Iterator<Item = PostPage<'_>> {
        (0..self.posts.len()).filter_map(|i| self.post_page(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;

    fn post(slug: &str, date: &str) -> Post {
        let fm = FrontMatter::parse(&[format!("title: {}", slug), format!("date: {}", date)]);
        Post::from_fields(slug, &fm, "")
    }

    fn project(slug: &str, featured: bool) -> Project {
        Project {
            slug: slug.to_string(),
            featured,
            ..Default::default()
        }
    }

    fn slugs(site: &SiteModel) -> Vec<&str> {
        site.posts().iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn test_sorted_newest_first() {
        let site = SiteModel::build(
            vec![
                post("old", "2022-05-01"),
                post("new", "2024-01-05"),
                post("mid", "2023-07-12"),
            ],
            vec![],
            &Limits::default(),
        );
        assert_eq!(slugs(&site), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_equal_dates_keep_read_order() {
        let site = SiteModel::build(
            vec![
                post("a", "2024-01-01"),
                post("b", "2024-01-01"),
                post("newer", "2024-02-01"),
                post("c", "2024-01-01"),
            ],
            vec![],
            &Limits::default(),
        );
        assert_eq!(slugs(&site), vec!["newer", "a", "b", "c"]);
    }

    #[test]
    fn test_unparseable_dates_sort_oldest_and_stable() {
        let site = SiteModel::build(
            vec![
                post("bad1", "not a date"),
                post("dated", "1999-12-31"),
                post("bad2", ""),
            ],
            vec![],
            &Limits::default(),
        );
        assert_eq!(slugs(&site), vec!["dated", "bad1", "bad2"]);
    }

    #[test]
    fn test_prev_next() {
        let site = SiteModel::build(
            vec![
                post("c", "2022-01-01"),
                post("a", "2024-01-01"),
                post("b", "2023-01-01"),
            ],
            vec![],
            &Limits::default(),
        );
        assert_eq!(slugs(&site), vec!["a", "b", "c"]);

        let a = site.post_page(0).unwrap();
        assert!(a.prev.is_none());
        assert_eq!(a.next.unwrap().slug, "b");

        let b = site.post_page(1).unwrap();
        assert_eq!(b.prev.unwrap().slug, "a");
        assert_eq!(b.next.unwrap().slug, "c");

        let c = site.post_page(2).unwrap();
        assert_eq!(c.prev.unwrap().slug, "b");
        assert!(c.next.is_none());

        assert!(site.post_page(3).is_none());
        assert_eq!(site.neighbors(7), Neighbors::default());
    }

    #[test]
    fn test_single_post_has_no_neighbors() {
        let site = SiteModel::build(vec![post("only", "2024-01-01")], vec![], &Limits::default());
        assert_eq!(site.neighbors(0), Neighbors::default());
    }

    #[test]
    fn test_recent_posts_bounded() {
        let posts = (1..=6).map(|d| post(&format!("p{d}"), &format!("2024-01-0{d}"))).collect();
        let site = SiteModel::build(posts, vec![], &Limits::default());
        let recent: Vec<_> = site.recent_posts().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(recent, vec!["p6", "p5", "p4", "p3"]);

        let few = SiteModel::build(vec![post("x", "2024-01-01")], vec![], &Limits::default());
        assert_eq!(few.recent_posts().len(), 1);
    }

    #[test]
    fn test_featured_projects_bounded_in_list_order() {
        let projects = vec![
            project("a", true),
            project("b", false),
            project("c", true),
            project("d", true),
            project("e", true),
        ];
        let site = SiteModel::build(vec![], projects, &Limits::default());
        let featured: Vec<_> = site.featured_projects().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(featured, vec!["a", "c", "d"]);
        assert_eq!(site.projects().len(), 5);
    }

    #[test]
    fn test_limits_can_be_substituted() {
        let limits = Limits {
            recent_posts: 1,
            featured_projects: 1,
        };
        let site = SiteModel::build(
            vec![post("a", "2024-01-01"), post("b", "2024-01-02")],
            vec![project("x", true), project("y", true)],
            &limits,
        );
        assert_eq!(site.recent_posts().len(), 1);
        assert_eq!(site.featured_projects().len(), 1);
    }

    #[test]
    fn test_search_index_follows_sorted_order() {
        let site = SiteModel::build(
            vec![post("old", "2020-01-01"), post("new", "2021-01-01")],
            vec![],
            &Limits::default(),
        );
        let entries: Vec<_> = site.search_index().iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(entries, vec!["new", "old"]);

        let json = serde_json::to_value(&site.search_index()[0]).unwrap();
        assert_eq!(json["readTimeMinutes"], 1);
        assert_eq!(json["tags"], serde_json::json!([]));
        assert_eq!(json["date"], "2021-01-01");
    }
}
