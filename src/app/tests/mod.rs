mod event_flow;
mod terminal_surface;
