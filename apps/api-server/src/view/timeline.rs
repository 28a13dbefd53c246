//! Timeline sections and post cards.

use chrono::{DateTime, Utc};

use cadence_core::domain::{Post, PostStatus};
use cadence_core::presenter::Timeline;

use super::escape::escape_html;

const EMPTY_STATE: &str = r#"<div class="empty-state">
  <p>No posts scheduled yet.</p>
  <p class="hint">Create your first scheduled post above!</p>
</div>"#;

/// Render the bucketed list. Buckets without posts are left out entirely.
pub fn render_timeline(timeline: &Timeline) -> String {
    if timeline.is_empty() {
        return EMPTY_STATE.to_string();
    }

    let mut html = String::from(r#"<div class="timeline">"#);
    html.push_str(&render_section(
        "upcoming",
        "Upcoming Posts",
        &timeline.upcoming,
        PostStatus::Upcoming,
        timeline.now,
    ));
    html.push_str(&render_section(
        "past",
        "Past Posts",
        &timeline.past,
        PostStatus::Past,
        timeline.now,
    ));
    html.push_str("</div>");
    html
}

fn render_section(
    id: &str,
    title: &str,
    posts: &[Post],
    status: PostStatus,
    now: DateTime<Utc>,
) -> String {
    if posts.is_empty() {
        return String::new();
    }

    let cards: String = posts
        .iter()
        .map(|post| render_card(post, status, now))
        .collect();

    format!(
        r#"<section id="{id}"><h2>{title} ({count})</h2>{cards}</section>"#,
        count = posts.len()
    )
}

fn render_card(post: &Post, status: PostStatus, now: DateTime<Utc>) -> String {
    let badge_class = match status {
        PostStatus::Upcoming => "badge badge-upcoming",
        PostStatus::Past => "badge badge-past",
    };

    let hint = match status {
        PostStatus::Upcoming => format!(
            r#"<div class="hint">Scheduled {}</div>"#,
            time_until(now, post.scheduled_at)
        ),
        PostStatus::Past => String::new(),
    };

    let image = post
        .image_url
        .as_deref()
        .map(|url| {
            format!(
                r#"<img class="attachment" src="{}" alt="Post attachment">"#,
                escape_html(url)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<article class="card">
  <header><span class="{badge_class}">{status}</span><div class="when"><div>{scheduled}</div>{hint}</div></header>
  <p class="caption">{caption}</p>
  {image}
  <footer>Created: {created}</footer>
</article>"#,
        scheduled = post.scheduled_at.format("%b %-d, %Y at %H:%M UTC"),
        caption = escape_html(&post.caption),
        created = post.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

/// Coarse countdown: whole days, else whole hours, else "now".
pub fn time_until(now: DateTime<Utc>, scheduled_at: DateTime<Utc>) -> String {
    let diff = scheduled_at - now;
    let days = diff.num_days();
    let hours = diff.num_hours() - days * 24;

    if days > 0 {
        format!("in {} day{}", days, if days > 1 { "s" } else { "" })
    } else if hours > 0 {
        format!("in {} hour{}", hours, if hours > 1 { "s" } else { "" })
    } else {
        "now".to_string()
    }
}
