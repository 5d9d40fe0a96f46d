//! Navigation menu rendering
//!
//! A menu document is written as ordinary markdown: an `h1` names the site,
//! an image is the logo and lists of links become buttons. The strategy pulls
//! title and logo out of the body and flattens lists into one button row per
//! link, tagged with the list depth.

use super::templates;
use super::{html, RenderStrategy, Renderer, UrlMapper};
use crate::elements::{Element, Heading, Image, LinkedImage, ListBlock};
use std::cell::RefCell;

#[derive(Debug, Default)]
struct Captured {
    title: String,
    logo: String,
}

/// Menu rendering. Holds what it captured, so use one instance per document.
#[derive(Debug, Default)]
pub struct MenuStrategy {
    captured: RefCell<Captured>,
}

impl MenuStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// The captured `h1`, as a title link to the parent page.
    pub fn title(&self) -> String {
        self.captured.borrow().title.clone()
    }

    pub fn logo(&self) -> String {
        self.captured.borrow().logo.clone()
    }

    fn buttons<'m>(
        &self,
        r: &Renderer<'m, Self>,
        list: &ListBlock,
        depth: usize,
        out: &mut Vec<String>,
    ) {
        for item in &list.items {
            match item {
                Element::ListItem(li) => {
                    for link in li.text.hyperlinks() {
                        out.push(templates::menu_button(
                            &r.link_addr(&link.addr),
                            depth,
                            &r.render_inline(&link.text),
                        ));
                    }
                }
                Element::ListBlock(nested) => self.buttons(r, nested, depth + 1, out),
                _ => {}
            }
        }
    }
}

impl RenderStrategy for MenuStrategy {
    fn heading(&self, r: &Renderer<'_, Self>, heading: &Heading) -> String {
        if heading.weight != 1 {
            return html::heading(r, heading);
        }
        self.captured.borrow_mut().title = format!(
            "<h1 id=\"menu-title\"><a href=\"../\">{}</a></h1>",
            r.render_inline(&heading.title)
        );
        String::new()
    }

    fn image(&self, r: &Renderer<'_, Self>, image: &Image) -> String {
        let logo = html::image(r, image);
        self.captured.borrow_mut().logo = logo;
        String::new()
    }

    fn linked_image(&self, r: &Renderer<'_, Self>, linked: &LinkedImage) -> String {
        let image = html::image(r, &linked.image);
        let logo = templates::link(&r.link_addr(&linked.link_addr), None, &image);
        self.captured.borrow_mut().logo = logo;
        String::new()
    }

    fn list_block(&self, r: &Renderer<'_, Self>, list: &ListBlock) -> String {
        let mut buttons = Vec::new();
        self.buttons(r, list, 0, &mut buttons);
        buttons.join("\n")
    }
}

impl<'m> Renderer<'m, MenuStrategy> {
    /// Renders the body, then assembles logo, title and buttons.
    pub fn render_menu(&self, elements: &[Element]) -> String {
        let body = self.render(elements);
        let strategy = self.strategy();
        templates::menu(&strategy.logo(), &strategy.title(), &body)
    }
}

/// Renders a menu document with a fresh strategy.
pub fn render_menu(elements: &[Element], mapper: &dyn UrlMapper) -> String {
    Renderer::with_mapper(MenuStrategy::new(), mapper).render_menu(elements)
}
