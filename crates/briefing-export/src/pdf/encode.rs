//! Serialise a [`FlowDocument`] with `pdf-writer`.

use pdf_writer::types::{ActionType, AnnotationType};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use briefing_core::theme::{Rgb, Typeface};

use super::metrics::{base_font, win_ansi};
use super::page::{DrawOp, FlowDocument, Page, Stroke};

const FACES: [(Typeface, &[u8]); 3] = [
    (Typeface::Sans, b"F1"),
    (Typeface::SansBold, b"F2"),
    (Typeface::Mono, b"F3"),
];

struct RefAlloc(i32);

impl RefAlloc {
    fn next(&mut self) -> Ref {
        self.0 += 1;
        Ref::new(self.0)
    }
}

pub fn encode(doc: &FlowDocument) -> Vec<u8> {
    let mut alloc = RefAlloc(0);
    let catalog_id = alloc.next();
    let tree_id = alloc.next();
    let info_id = alloc.next();
    let font_ids: Vec<Ref> = FACES.iter().map(|_| alloc.next()).collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.document_info(info_id).title(TextStr(&doc.title));

    for ((face, _), id) in FACES.iter().zip(&font_ids) {
        pdf.type1_font(*id)
            .base_font(Name(base_font(*face)))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    let mut page_ids = Vec::with_capacity(doc.page_count());
    for page in doc.pages() {
        let page_id = alloc.next();
        let content_id = alloc.next();
        page_ids.push(page_id);

        let links: Vec<(Ref, &DrawOp)> = page
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Link { .. }))
            .map(|op| (alloc.next(), op))
            .collect();

        pdf.stream(content_id, &content(page));

        let mut writer = pdf.page(page_id);
        writer
            .media_box(Rect::new(0.0, 0.0, doc.setup.width, doc.setup.height))
            .parent(tree_id)
            .contents(content_id);
        {
            let mut resources = writer.resources();
            let mut fonts = resources.fonts();
            for ((_, name), id) in FACES.iter().zip(&font_ids) {
                fonts.pair(Name(name), *id);
            }
        }
        if !links.is_empty() {
            writer.annotations(links.iter().map(|(id, _)| *id));
        }
        writer.finish();

        for (id, op) in links {
            if let DrawOp::Link {
                x,
                y,
                width,
                height,
                uri,
            } = op
            {
                let mut annot = pdf.annotation(id);
                annot
                    .subtype(AnnotationType::Link)
                    .rect(Rect::new(*x, *y, x + width, y + height));
                annot.border_style().width(0.0);
                annot
                    .action()
                    .action_type(ActionType::Uri)
                    .uri(Str(uri.as_bytes()));
            }
        }
    }

    let count = page_ids.len() as i32;
    pdf.pages(tree_id).kids(page_ids).count(count);

    pdf.finish()
}

fn content(page: &Page) -> Vec<u8> {
    let mut content = Content::new();
    for op in &page.ops {
        match op {
            DrawOp::Text {
                x,
                y,
                face,
                size,
                color,
                text,
            } => {
                let name = FACES
                    .iter()
                    .find(|(f, _)| f == face)
                    .map_or(&b"F1"[..], |(_, n)| *n);
                fill(&mut content, *color);
                content.begin_text();
                content.set_font(Name(name), *size);
                content.next_line(*x, *y);
                content.show(Str(&win_ansi(text)));
                content.end_text();
            }
            DrawOp::Rect {
                x,
                y,
                width,
                height,
                fill: fill_color,
                stroke,
            } => {
                content.save_state();
                if let Some(color) = fill_color {
                    fill(&mut content, *color);
                }
                if let Some(s) = stroke {
                    set_stroke(&mut content, *s);
                }
                content.rect(*x, *y, *width, *height);
                match (fill_color, stroke) {
                    (Some(_), Some(_)) => content.fill_nonzero_and_stroke(),
                    (Some(_), None) => content.fill_nonzero(),
                    (None, Some(_)) => content.stroke(),
                    (None, None) => content.end_path(),
                };
                content.restore_state();
            }
            DrawOp::Line { from, to, stroke } => {
                content.save_state();
                set_stroke(&mut content, *stroke);
                content.move_to(from.0, from.1);
                content.line_to(to.0, to.1);
                content.stroke();
                content.restore_state();
            }
            DrawOp::Link { .. } => {}
        }
    }
    content.finish()
}

fn fill(content: &mut Content, color: Rgb) {
    let (r, g, b) = color.to_unit();
    content.set_fill_rgb(r, g, b);
}

fn set_stroke(content: &mut Content, stroke: Stroke) {
    let (r, g, b) = stroke.color.to_unit();
    content.set_stroke_rgb(r, g, b);
    content.set_line_width(stroke.width);
}
