//! HTML render surface: the timetable SVG inside a page that shows course
//! details when the pointer rests on a block.

use serde::Serialize;

use crate::{
    course::Weekday,
    geometry::{TimeBlock, Timetable},
    render::{render_frame, RenderOptions},
    ui::{self, Layout},
    utils::format_minutes,
};

/// What the tooltip shows for one course.
#[derive(Debug, Serialize)]
struct HoverDetails<'a> {
    name: &'a str,
    day: Weekday,
    lecturer: &'a str,
    room: &'a str,
    credits: u32,
    start: String,
    end: String,
}

impl<'a> From<&'a TimeBlock> for HoverDetails<'a> {
    fn from(block: &'a TimeBlock) -> Self {
        HoverDetails {
            name: &block.name,
            day: block.day,
            lecturer: &block.lecturer,
            room: &block.room,
            credits: block.credits,
            start: format_minutes(block.start_minutes),
            end: format_minutes(block.end_minutes),
        }
    }
}

pub fn render_page(table: &Timetable, options: &RenderOptions) -> String {
    let layout = Layout::new(options.canvas, &table.bounds, 0);
    let mut doc = render_frame(&layout, options);
    for (i, block) in table.blocks.iter().enumerate() {
        doc = doc.add(
            ui::block_group(&layout, block)
                .set("class", "course")
                .set("data-course", i.to_string()),
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <div class="timetable">
{svg}
    </div>
    <div id="tooltip" class="tooltip"></div>
    <script>
    const courseData = {data};
{js}
    </script>
</body>
</html>
"#,
        title = html_escape(&format!("{}'s Study Timetable", options.user)),
        css = CSS,
        svg = doc,
        data = course_data_json(&table.blocks),
        js = JS,
    )
}

/// Hover details as a JSON array indexed like `data-course`, safe to inline
/// in a `<script>` element.
fn course_data_json(blocks: &[TimeBlock]) -> String {
    let details: Vec<HoverDetails> = blocks.iter().map(HoverDetails::from).collect();
    serde_json::to_string(&details)
        .expect("hover details are plain strings and integers")
        .replace("</", "<\\/")
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const CSS: &str = r#"        body {
            font-family: sans-serif;
            margin: 0;
            padding: 16px;
            background: #fafafa;
        }
        .course {
            cursor: pointer;
        }
        .course:hover rect {
            stroke-width: 3;
        }
        .tooltip {
            position: fixed;
            background: rgba(0, 0, 0, 0.85);
            color: white;
            padding: 8px 12px;
            border-radius: 4px;
            font-size: 13px;
            pointer-events: none;
            opacity: 0;
            transition: opacity 0.15s;
        }
        .tooltip.visible {
            opacity: 1;
        }
        .tooltip .course-name {
            font-weight: 600;
            margin-bottom: 4px;
        }"#;

const JS: &str = r#"    const tooltip = document.getElementById('tooltip');

    document.querySelectorAll('.course').forEach(group => {
        group.addEventListener('mouseenter', () => {
            const data = courseData[Number(group.getAttribute('data-course'))];
            if (!data) {
                return;
            }
            tooltip.replaceChildren();
            const lines = [
                data.name,
                data.lecturer,
                data.room,
                `${data.day} ${data.start} - ${data.end}`,
                `${data.credits} credits`,
            ];
            lines.forEach((text, i) => {
                const div = document.createElement('div');
                if (i === 0) {
                    div.className = 'course-name';
                }
                div.textContent = text;
                tooltip.appendChild(div);
            });
            tooltip.classList.add('visible');
        });

        group.addEventListener('mousemove', (e) => {
            tooltip.style.left = (e.clientX + 15) + 'px';
            tooltip.style.top = (e.clientY + 15) + 'px';
        });

        group.addEventListener('mouseleave', () => {
            tooltip.classList.remove('visible');
        });
    });"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{course::load, geometry::build_blocks, render::RenderMode, utils::ColorStrategy};

    fn sample() -> Timetable {
        let input = "course_name,credits,day,start_time,duration,room,lecturer\n\
                     Algorithms,5,Monday,09:00,90,Room 3,Dr. X\n\
                     Night Lab,2,Friday,23:30,60,Lab </script>,Dr. Owl\n";
        build_blocks(&load(input.as_bytes()).unwrap(), ColorStrategy::Spread).unwrap()
    }

    #[test]
    fn page_embeds_chart_and_hover_data() {
        let options = RenderOptions {
            user: "Marieke".to_string(),
            ..RenderOptions::default()
        };
        let html = RenderMode::Interactive.render(&sample(), &options);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Marieke's Study Timetable</title>"));
        assert!(html.contains("<svg"));
        assert_eq!(html.matches("data-course=\"").count(), 2);
        assert!(html.contains(r#""name":"Algorithms""#));
        assert!(html.contains(r#""start":"09:00","end":"10:30""#));
        assert!(html.contains(r#""day":"Monday""#));
    }

    #[test]
    fn hover_end_time_wraps_past_midnight() {
        let json = course_data_json(&sample().blocks);
        assert!(json.contains(r#""start":"23:30","end":"00:30""#));
    }

    #[test]
    fn script_breakouts_are_escaped() {
        let json = course_data_json(&sample().blocks);
        assert!(!json.contains("</script>"));
        assert!(json.contains(r"Lab <\/script>"));
    }

    #[test]
    fn hover_data_is_one_json_entry_per_block() {
        let table = sample();
        let json = course_data_json(&table.blocks);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), table.blocks.len());
        assert_eq!(entries[1]["room"], "Lab </script>");
        assert_eq!(entries[1]["credits"], 2);
    }

    #[test]
    fn interactive_page_has_no_legend() {
        let html = RenderMode::Interactive.render(&sample(), &RenderOptions::default());
        // background + 7 header cells + 2 blocks
        assert_eq!(html.matches("<rect").count(), 10);
    }

    #[test]
    fn escapes_user_in_page_title() {
        assert_eq!(html_escape("<Bob & \"Al\">"), "&lt;Bob &amp; &quot;Al&quot;&gt;");
    }
}
