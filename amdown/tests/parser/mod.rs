mod document;
mod properties;
