//! Screen state of the public kiosk.
//!
//! A single owned [`Kiosk`] decides what is on screen. [`ViewState::on`] is a
//! pure transition function; the caller supplies time, nothing here reads a
//! clock or persists anything, so a reload is just [`Kiosk::new`].

use std::time::{Duration, Instant};

/// Inactivity before the video loop takes over.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    PublicBrowse { category: Option<i32> },
    PostDetail { category: Option<i32>, post: i32 },
    VideoOverlay { index: usize },
    LoginPrompt,
    AdminPanel,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::PublicBrowse { category: None }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    SelectCategory(Option<i32>),
    OpenPost(i32),
    Back,
    AdminEntry,
    LoginSucceeded,
    LoginFailed,
    Cancel,
    Logout,
    /// Any pointer, key or touch activity.
    Input,
    /// The idle timeout elapsed with `videos` videos available.
    Idle { videos: usize },
    VideoEnded { videos: usize },
}

impl ViewState {
    pub fn on(self, event: Event) -> ViewState {
        use Event::*;
        use ViewState::*;

        match (self, event) {
            (VideoOverlay { .. }, Input) => PublicBrowse { category: None },
            (VideoOverlay { index }, VideoEnded { videos }) if videos > 0 => {
                VideoOverlay {
                    index: (index + 1) % videos,
                }
            }
            (VideoOverlay { .. }, VideoEnded { .. }) => {
                PublicBrowse { category: None }
            }

            (PublicBrowse { .. } | PostDetail { .. }, Idle { videos })
                if videos > 0 =>
            {
                VideoOverlay { index: 0 }
            }
            (
                PublicBrowse { .. } | PostDetail { .. },
                SelectCategory(category),
            ) => PublicBrowse { category },
            (PublicBrowse { category }, OpenPost(post)) => {
                PostDetail { category, post }
            }
            (PostDetail { .. }, Back) => PublicBrowse { category: None },

            (PublicBrowse { .. }, AdminEntry) => LoginPrompt,
            (LoginPrompt, LoginSucceeded) => AdminPanel,
            (LoginPrompt, LoginFailed) => LoginPrompt,
            (LoginPrompt, Cancel) => PublicBrowse { category: None },
            (AdminPanel, Logout) => PublicBrowse { category: None },

            (state, _) => state,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Kiosk {
    state: ViewState,
    idle_timeout: Duration,
    last_input: Instant,
    videos: usize,
}

impl Kiosk {
    pub fn new(idle_timeout: Duration, now: Instant) -> Self {
        Self {
            state: ViewState::default(),
            idle_timeout,
            last_input: now,
            videos: 0,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Records the number of videos after a fetch.
    pub fn set_videos(&mut self, videos: usize) {
        self.videos = videos;

        if let ViewState::VideoOverlay { index } = self.state {
            self.state = if videos == 0 {
                ViewState::default()
            } else {
                ViewState::VideoOverlay {
                    index: index % videos,
                }
            };
        }
    }

    /// A user action. While the video loop is showing it only dismisses it.
    pub fn user(&mut self, event: Event, now: Instant) {
        self.last_input = now;

        self.state = match self.state {
            ViewState::VideoOverlay { .. } => self.state.on(Event::Input),
            state => state.on(event),
        };
    }

    pub fn tick(&mut self, now: Instant) {
        if now.saturating_duration_since(self.last_input) >= self.idle_timeout {
            self.state = self.state.on(Event::Idle {
                videos: self.videos,
            });
        }
    }

    pub fn video_ended(&mut self) {
        self.state = self.state.on(Event::VideoEnded {
            videos: self.videos,
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn kiosk(videos: usize) -> (Kiosk, Instant) {
        let start = Instant::now();
        let mut kiosk = Kiosk::new(DEFAULT_IDLE_TIMEOUT, start);
        kiosk.set_videos(videos);
        (kiosk, start)
    }

    #[test]
    fn test_browse_to_detail_and_back() {
        // Arrange
        let (mut kiosk, start) = kiosk(0);

        // Act
        kiosk.user(Event::SelectCategory(Some(2)), start);
        kiosk.user(Event::OpenPost(9), start);
        let detail = kiosk.state();
        kiosk.user(Event::Back, start);

        // Assert
        assert_eq!(
            detail,
            ViewState::PostDetail {
                category: Some(2),
                post: 9
            }
        );
        assert_eq!(kiosk.state(), ViewState::PublicBrowse { category: None });
    }

    #[test]
    fn test_idle_starts_video_loop() {
        let (mut kiosk, start) = kiosk(2);

        kiosk.tick(start + Duration::from_secs(2));
        assert_eq!(kiosk.state(), ViewState::PublicBrowse { category: None });

        kiosk.tick(start + DEFAULT_IDLE_TIMEOUT);
        assert_eq!(kiosk.state(), ViewState::VideoOverlay { index: 0 });
    }

    #[test]
    fn test_idle_without_videos_stays() {
        let (mut kiosk, start) = kiosk(0);

        kiosk.tick(start + Duration::from_secs(60));

        assert_eq!(kiosk.state(), ViewState::PublicBrowse { category: None });
    }

    #[test]
    fn test_videos_loop_and_input_dismisses() {
        // Arrange
        let (mut kiosk, start) = kiosk(2);
        kiosk.user(Event::OpenPost(1), start);
        kiosk.tick(start + Duration::from_secs(5));

        // Act
        kiosk.video_ended();
        let second = kiosk.state();
        kiosk.video_ended();
        let wrapped = kiosk.state();
        kiosk.user(Event::OpenPost(3), start + Duration::from_secs(6));

        // Assert
        assert_eq!(second, ViewState::VideoOverlay { index: 1 });
        assert_eq!(wrapped, ViewState::VideoOverlay { index: 0 });
        assert_eq!(kiosk.state(), ViewState::PublicBrowse { category: None });

        // the dismissing input restarts the idle timer
        kiosk.tick(start + Duration::from_secs(8));
        assert_eq!(kiosk.state(), ViewState::PublicBrowse { category: None });
    }

    #[test]
    fn test_admin_flow_is_never_preempted() {
        // Arrange
        let (mut kiosk, start) = kiosk(1);

        // Act
        kiosk.user(Event::AdminEntry, start);
        kiosk.user(Event::LoginFailed, start);
        let retry = kiosk.state();
        kiosk.user(Event::LoginSucceeded, start);
        kiosk.tick(start + Duration::from_secs(600));
        let admin = kiosk.state();
        kiosk.user(Event::Logout, start + Duration::from_secs(601));

        // Assert
        assert_eq!(retry, ViewState::LoginPrompt);
        assert_eq!(admin, ViewState::AdminPanel);
        assert_eq!(kiosk.state(), ViewState::PublicBrowse { category: None });
    }

    #[test]
    fn test_login_prompt_cancel() {
        let state = ViewState::LoginPrompt.on(Event::Cancel);

        assert_eq!(state, ViewState::PublicBrowse { category: None });
    }

    #[test]
    fn test_admin_entry_only_from_browse() {
        let detail = ViewState::PostDetail {
            category: None,
            post: 1,
        };

        assert_eq!(detail.on(Event::AdminEntry), detail);
    }

    #[test]
    fn test_losing_all_videos_leaves_overlay() {
        let (mut kiosk, start) = kiosk(3);
        kiosk.tick(start + DEFAULT_IDLE_TIMEOUT);
        kiosk.video_ended();
        kiosk.video_ended();

        kiosk.set_videos(2);
        assert_eq!(kiosk.state(), ViewState::VideoOverlay { index: 0 });

        kiosk.set_videos(0);
        assert_eq!(kiosk.state(), ViewState::PublicBrowse { category: None });
    }
}
