//! Text layout of the banner drawn beneath the board.

/// Height of the banner frame, measured from the board's last row.
pub(crate) const BANNER_HEIGHT: u32 = 4;

/// Row offset, relative to the board's last row, of the banner's text line.
pub(crate) const BANNER_TEXT_OFFSET: u32 = BANNER_HEIGHT / 2;

/// Lines of the banner frame, top to bottom.
///
/// The frame shares its top edge with the board's last row, so the first
/// line is a full wall and the following ones are hollow until the bottom
/// edge. The title is centred on the text line.
#[must_use]
pub(crate) fn frame_lines(width: u32, title: &str) -> Vec<String> {
    let width = width as usize;
    let solid = "#".repeat(width);
    let hollow = if width >= 2 {
        format!("#{}#", " ".repeat(width - 2))
    } else {
        solid.clone()
    };

    (0..=BANNER_HEIGHT)
        .map(|offset| {
            if offset == 0 || offset == BANNER_HEIGHT {
                solid.clone()
            } else if offset == BANNER_TEXT_OFFSET {
                overlay_centred(&hollow, title)
            } else {
                hollow.clone()
            }
        })
        .collect()
}

/// Text placed inside the frame's side walls to replace the title.
///
/// The message is padded with equal margins on both sides so it overwrites
/// the title it replaces.
#[must_use]
pub(crate) fn message_line(width: u32, message: &str) -> String {
    let inner = (width as usize).saturating_sub(2);
    let margin = inner.saturating_sub(message.chars().count()) / 2;
    let line = format!("{0}{1}{0}", " ".repeat(margin), message);
    line.chars().take(inner).collect()
}

fn overlay_centred(line: &str, text: &str) -> String {
    let width = line.chars().count();
    let length = text.chars().count();
    if length > width {
        return line.to_owned();
    }
    let margin = (width - length) / 2;
    line.chars()
        .take(margin)
        .chain(text.chars())
        .chain(line.chars().skip(margin + length))
        .collect()
}
