use chrono::NaiveDate;
use gloo_timers::callback::Interval;
use yew::prelude::*;

const FEATURED_ROTATE_MS: u32 = 10_000;

pub struct Post {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub date: (i32, u32, u32),
    pub category: &'static str,
    pub image: &'static str,
    pub read_minutes: u32,
}

impl Post {
    fn published(&self) -> Option<NaiveDate> {
        let (y, m, d) = self.date;
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn date_label(&self) -> String {
        self.published()
            .map(|d| d.format("%-d %B %Y").to_string())
            .unwrap_or_default()
    }
}

const FEATURED: &[Post] = &[
    Post {
        title: "Sustainable and Profitable Growth & What We Can Learn From Modern E-commerce",
        excerpt: "How our team built scalable solutions that drive real business value while maintaining sustainable growth practices.",
        author: "Frankie Sullivan",
        date: (2025, 4, 10),
        category: "Company Updates",
        image: "/assets/modern-ecommerce-dashboard.png",
        read_minutes: 12,
    },
    Post {
        title: "Launching AI Agent Suite Beta: Automating Support and Operations for SMBs",
        excerpt: "Our latest AI-powered workflow automation tools are now available in beta, helping small businesses streamline their operations.",
        author: "Demi Wilkinson",
        date: (2025, 1, 16),
        category: "Product Launch",
        image: "/assets/ai-agent-interface-with-automation-workflows.jpg",
        read_minutes: 8,
    },
    Post {
        title: "FinanceFlow: From Bills to Insights",
        excerpt: "What we learned building finance tools that teams actually use, and how we achieved 40% faster financial reporting.",
        author: "Candice Wu",
        date: (2025, 1, 15),
        category: "Case Study",
        image: "/assets/finance-management-dashboard-with-charts.jpg",
        read_minutes: 10,
    },
];

const POSTS: &[Post] = &[
    Post {
        title: "Improve Your Design Skills: Develop an 'Eye' for Design",
        excerpt: "Essential techniques for developing your design intuition and creating more effective user interfaces.",
        author: "Candice Wu",
        date: (2025, 1, 15),
        category: "Design",
        image: "/assets/placeholder.jpg",
        read_minutes: 6,
    },
    Post {
        title: "A Relentless Pursuit of Perfection in Product Design",
        excerpt: "Exploring the contrast between well-made and poorly made products, and what makes design truly exceptional.",
        author: "Lana Steiner",
        date: (2025, 1, 18),
        category: "Design",
        image: "/assets/placeholder.jpg",
        read_minutes: 9,
    },
    Post {
        title: "How Remote Collaboration Makes Us Better Designers",
        excerpt: "The benefits of remote work and collaboration tools in strengthening design teams and improving outcomes.",
        author: "Natali Craig",
        date: (2025, 1, 14),
        category: "Remote Work",
        image: "/assets/placeholder.jpg",
        read_minutes: 5,
    },
    Post {
        title: "Best Books on Scaling Your Early-Stage Startup",
        excerpt: "Essential reading list for entrepreneurs looking to scale their early-stage companies effectively.",
        author: "Natali Craig",
        date: (2025, 1, 14),
        category: "Startup",
        image: "/assets/placeholder.jpg",
        read_minutes: 7,
    },
    Post {
        title: "How to Run a Successful Business With Your Partner",
        excerpt: "Practical advice on starting and running a business with your partner, based on our own experience.",
        author: "Frankie Sullivan",
        date: (2025, 1, 12),
        category: "Business",
        image: "/assets/placeholder.jpg",
        read_minutes: 8,
    },
];

/// Newest first, optionally narrowed to one category.
pub fn visible_posts<'a>(posts: &'a [Post], category: Option<&str>) -> Vec<&'a Post> {
    let mut out: Vec<&Post> = posts
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .collect();
    out.sort_by(|a, b| b.published().cmp(&a.published()));
    out
}

pub fn categories(posts: &[Post]) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for post in posts {
        if !out.contains(&post.category) {
            out.push(post.category);
        }
    }
    out
}

#[function_component(Blog)]
pub fn blog() -> Html {
    let featured_index = use_state(|| 0usize);
    let category = use_state(|| None::<&'static str>);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    {
        let current = *featured_index;
        let featured_index = featured_index.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(FEATURED_ROTATE_MS, move || {
                    featured_index.set((*featured_index + 1) % FEATURED.len());
                });
                move || drop(interval)
            },
            current,
        );
    }

    let featured = &FEATURED[*featured_index % FEATURED.len()];
    let posts = visible_posts(POSTS, *category);

    let select_category = |value: Option<&'static str>| {
        let category = category.clone();
        Callback::from(move |_: MouseEvent| category.set(value))
    };

    html! {
        <div class="blog-list-page">
            <section class="blog-list-hero">
                <h1>{"Blog"}</h1>
                <p>{"Notes from the studio: launches, case studies and the craft of shipping products."}</p>
            </section>

            <section class="blog-featured">
                <img src={featured.image} alt={featured.title} loading="lazy" class="blog-preview-image" />
                <div class="blog-featured-body">
                    <span class="blog-category">{featured.category}</span>
                    <h2>{featured.title}</h2>
                    <p>{featured.excerpt}</p>
                    <span class="blog-date">
                        {format!("{} · {} · {} min read", featured.author, featured.date_label(), featured.read_minutes)}
                    </span>
                </div>
                <div class="blog-featured-dots">
                    { for (0..FEATURED.len()).map(|i| {
                        let featured_index = featured_index.clone();
                        html! {
                            <button
                                class={classes!("dot", (i == *featured_index).then(|| "active"))}
                                onclick={Callback::from(move |_: MouseEvent| featured_index.set(i))}
                            />
                        }
                    }) }
                </div>
            </section>

            <section class="blog-filters">
                <button
                    class={classes!("filter", category.is_none().then(|| "active"))}
                    onclick={select_category(None)}
                >
                    {"All"}
                </button>
                { for categories(POSTS).into_iter().map(|c| html! {
                    <button
                        class={classes!("filter", (*category == Some(c)).then(|| "active"))}
                        onclick={select_category(Some(c))}
                    >
                        {c}
                    </button>
                }) }
            </section>

            <section class="blog-list-section">
                { for posts.into_iter().map(|post| html! {
                    <div class="blog-post-preview">
                        <img src={post.image} alt={post.title} loading="lazy" class="blog-preview-image" />
                        <span class="blog-category">{post.category}</span>
                        <h2>{post.title}</h2>
                        <p>{post.excerpt}</p>
                        <span class="blog-date">{format!("{} · {}", post.author, post.date_label())}</span>
                    </div>
                }) }
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_are_newest_first() {
        let posts = visible_posts(POSTS, None);
        assert_eq!(posts.len(), POSTS.len());
        assert_eq!(posts[0].title, "A Relentless Pursuit of Perfection in Product Design");
        assert!(posts.windows(2).all(|w| w[0].published() >= w[1].published()));
    }

    #[test]
    fn category_filter_narrows_posts() {
        let design = visible_posts(POSTS, Some("Design"));
        assert_eq!(design.len(), 2);
        assert!(visible_posts(POSTS, Some("Gardening")).is_empty());
    }

    #[test]
    fn categories_are_unique_in_order() {
        assert_eq!(
            categories(POSTS),
            vec!["Design", "Remote Work", "Startup", "Business"]
        );
    }

    #[test]
    fn dates_render_long_form() {
        assert_eq!(FEATURED[0].date_label(), "10 April 2025");
    }
}
