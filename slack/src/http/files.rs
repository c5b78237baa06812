//! Get info on files uploaded to Slack, upload new files to Slack.

use super::Method::{Get, Post};
use super::{optional, required, EndpointDescriptor, TOKEN};
use crate::options::Value;

pub const FILE: &str = "file";
/// Filter files created by a single user.
pub const USER: &str = "user";
/// Filter files created after this timestamp (inclusive).
pub const TS_FROM: &str = "ts_from";
/// Filter files created before this timestamp (inclusive).
pub const TS_TO: &str = "ts_to";
/// Filter files by type. See [`FileType`].
pub const TYPES: &str = "types";
/// Number of items to return per page.
pub const COUNT: &str = "count";
/// Page number of results to return.
pub const PAGE: &str = "page";
/// File contents via a POST variable, as an alternative to `file`.
pub const CONTENT: &str = "content";
/// A file type identifier.
pub const FILETYPE: &str = "filetype";
/// Filename of file.
pub const FILENAME: &str = "filename";
/// Title of file.
pub const TITLE: &str = "title";
/// Initial comment to add to file.
pub const INITIAL_COMMENT: &str = "initial_comment";
/// Comma-separated list of channel names or IDs where the file will be shared.
pub const CHANNELS: &str = "channels";

pub const DESCRIPTORS: &[EndpointDescriptor] = &[LIST, INFO, UPLOAD, DELETE];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FileType {
    #[default]
    All,
    Spaces,
    Snippets,
    Images,
    Gdocs,
    Zips,
    Pdfs,
}

impl From<FileType> for Value {
    fn from(kind: FileType) -> Value {
        let name = match kind {
            FileType::All => "all",
            FileType::Spaces => "spaces",
            FileType::Snippets => "snippets",
            FileType::Images => "images",
            FileType::Gdocs => "gdocs",
            FileType::Zips => "zips",
            FileType::Pdfs => "pdfs",
        };
        Value::Str(name.to_string())
    }
}

pub const LIST: EndpointDescriptor = EndpointDescriptor::new(
    "files",
    "list",
    Get,
    &[
        TOKEN,
        optional(USER),
        optional(TS_FROM),
        optional(TS_TO),
        optional(TYPES),
        optional(COUNT),
        optional(PAGE),
    ],
);

api_call!(
    /// Lists & filters team files.
    ///
    /// Wraps https://api.slack.com/methods/files.list
    list, LIST, ()
);

pub const INFO: EndpointDescriptor = EndpointDescriptor::new(
    "files",
    "info",
    Get,
    &[TOKEN, required(FILE), optional(COUNT), optional(PAGE)],
);

api_call!(
    /// Gets information about a team file.
    ///
    /// Wraps https://api.slack.com/methods/files.info
    info, INFO, (file: &str)
);

pub const UPLOAD: EndpointDescriptor = EndpointDescriptor::new(
    "files",
    "upload",
    Post,
    &[
        TOKEN,
        optional(FILE),
        optional(CONTENT),
        optional(FILETYPE),
        optional(FILENAME),
        optional(TITLE),
        optional(INITIAL_COMMENT),
        optional(CHANNELS),
    ],
);

api_call!(
    /// Uploads or creates a file. Contents are sent as a form field, not a
    /// multipart upload.
    ///
    /// Wraps https://api.slack.com/methods/files.upload
    upload, UPLOAD, ()
);

pub const DELETE: EndpointDescriptor =
    EndpointDescriptor::new("files", "delete", Post, &[TOKEN, required(FILE)]);

api_call!(
    /// Deletes a file.
    ///
    /// Wraps https://api.slack.com/methods/files.delete
    delete, DELETE, (file: &str)
);
