use cfg_if::cfg_if;

pub mod structs;

cfg_if! {
  if #[cfg(feature = "full")] {
    pub mod club_view;
    pub mod comment_view;
    pub mod person_view;
    pub mod post_view;
  }
}
