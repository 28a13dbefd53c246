//! Full page layout: creation form plus the timeline.

use cadence_core::presenter::Timeline;
use cadence_core::validation::{MAX_CAPTION_CHARS, MAX_IMAGE_BYTES};

use super::timeline::render_timeline;

const LOAD_FAILED: &str =
    r#"<div class="empty-state error">Posts could not be loaded right now. Please try again.</div>"#;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #d1d5db; margin: 0; padding: 2rem 1rem; color: #111827; }
main { max-width: 64rem; margin: 0 auto; display: grid; grid-template-columns: 1fr 2fr; gap: 2rem; }
header.page { max-width: 64rem; margin: 0 auto 3rem; text-align: center; }
form, .card, .empty-state { background: #fff; border-radius: .5rem; box-shadow: 0 1px 3px rgba(0,0,0,.15); padding: 1.5rem; }
form label { display: block; font-size: .875rem; font-weight: 500; margin: 1rem 0 .25rem; }
form textarea, form input { width: 100%; box-sizing: border-box; }
form button { margin-top: 1.5rem; width: 100%; padding: .5rem; background: #2563eb; color: #fff; border: 0; border-radius: .375rem; }
form button:disabled { opacity: .5; }
.card { margin-bottom: 1rem; }
.card header { display: flex; justify-content: space-between; }
.badge { padding: .125rem .625rem; border-radius: 9999px; font-size: .75rem; font-weight: 500; }
.badge-past { background: #dcfce7; color: #166534; }
.badge-upcoming { background: #dbeafe; color: #1e40af; }
.caption { white-space: pre-wrap; }
.attachment { max-width: 100%; max-height: 16rem; border-radius: .5rem; }
.hint, .card footer { font-size: .75rem; color: #6b7280; }
.empty-state { text-align: center; color: #6b7280; }
@media (max-width: 60rem) { main { grid-template-columns: 1fr; } }
"#;

/// Render the whole page. `None` means the post list could not be loaded.
pub fn render_index(timeline: Option<&Timeline>) -> String {
    let list = timeline.map(render_timeline).unwrap_or_else(|| LOAD_FAILED.to_string());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Social Media Scheduler</title>
<style>{STYLE}</style>
</head>
<body>
<header class="page">
  <h1>Social Media Scheduler</h1>
  <p>Schedule your social media posts with images and manage them all in one place.</p>
</header>
<main>
  <div>
    <h2>Create New Post</h2>
    {form}
  </div>
  <div>
    <h2>Scheduled Posts</h2>
    {list}
  </div>
</main>
<script>{script}</script>
</body>
</html>"#,
        form = render_form(),
        script = form_script(),
    )
}

fn render_form() -> String {
    format!(
        r#"<form id="post-form">
  <label for="caption">Caption *</label>
  <textarea id="caption" name="caption" rows="3" maxlength="{MAX_CAPTION_CHARS}" required placeholder="What's on your mind?"></textarea>
  <label for="image">Image (JPEG, max 3MB)</label>
  <input id="image" name="image" type="file" accept="image/jpeg">
  <label for="scheduledAt">Scheduled Date &amp; Time *</label>
  <input id="scheduledAt" name="scheduledAt" type="datetime-local" required>
  <button type="submit">Schedule Post</button>
</form>"#
    )
}

/// Uploads the image before creating the post, as any API client would.
fn form_script() -> String {
    format!(
        r#"
const form = document.getElementById('post-form');
form.addEventListener('submit', async (event) => {{
  event.preventDefault();
  const button = form.querySelector('button');
  const caption = form.caption.value;
  const local = form.scheduledAt.value;
  const file = form.image.files[0];

  if (!caption) {{ alert('Caption is required'); return; }}
  if (caption.length > {MAX_CAPTION_CHARS}) {{ alert('Caption too long'); return; }}
  if (!local) {{ alert('Scheduled date is required'); return; }}
  const scheduledAt = new Date(local);
  if (scheduledAt <= new Date()) {{ alert('Scheduled date must be in the future'); return; }}
  if (file && file.type !== 'image/jpeg') {{ alert('Only JPEG images are allowed'); return; }}
  if (file && file.size > {MAX_IMAGE_BYTES}) {{ alert('File size must be less than 3MB'); return; }}

  button.disabled = true;
  button.textContent = 'Creating Post...';
  try {{
    let imageUrl = '';
    if (file) {{
      const upload = new FormData();
      upload.append('image', file);
      const res = await fetch('/api/upload', {{ method: 'POST', body: upload }});
      const data = await res.json();
      if (!res.ok) throw new Error(data.error || 'Upload failed');
      imageUrl = data.imageUrl;
    }}

    const body = new FormData();
    body.append('caption', caption);
    body.append('scheduledAt', scheduledAt.toISOString());
    if (imageUrl) body.append('imageUrl', imageUrl);
    const res = await fetch('/api/posts', {{ method: 'POST', body }});
    if (!res.ok) {{
      const data = await res.json();
      throw new Error(data.error || 'Failed to create post');
    }}
    window.location.reload();
  }} catch (err) {{
    alert(err.message);
    button.disabled = false;
    button.textContent = 'Schedule Post';
  }}
}});
"#
    )
}
