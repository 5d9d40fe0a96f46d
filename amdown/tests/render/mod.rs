mod html;
mod menu;
mod print;
