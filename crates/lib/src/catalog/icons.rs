//! Icon names accepted in `icon` front matter, matching the Lucide icon set
//! the site templates render. Kept sorted for binary search.

pub const ICONS: &[&str] = &[
    "activity",
    "airplay",
    "alarm-check",
    "alarm-clock",
    "alarm-clock-off",
    "alarm-minus",
    "alarm-plus",
    "alarm-smoke",
    "album",
    "alert-circle",
    "alert-octagon",
    "alert-triangle",
    "align-center",
    "align-center-horizontal",
    "align-center-vertical",
    "align-end-horizontal",
    "align-end-vertical",
    "align-horizontal-distribute-center",
    "align-horizontal-distribute-end",
    "align-horizontal-distribute-start",
    "align-horizontal-justify-center",
    "align-horizontal-justify-end",
    "align-horizontal-justify-start",
    "align-horizontal-space-around",
    "align-horizontal-space-between",
    "align-justify",
    "align-left",
    "align-right",
    "align-start-horizontal",
    "align-start-vertical",
    "align-vertical-distribute-center",
    "align-vertical-distribute-end",
    "align-vertical-distribute-start",
    "align-vertical-justify-center",
    "align-vertical-justify-end",
    "align-vertical-justify-start",
    "align-vertical-space-around",
    "align-vertical-space-between",
    "anchor",
    "angry",
    "annoyed",
    "aperture",
    "apple",
    "archive",
    "archive-restore",
    "armchair",
    "arrow-big-down",
    "arrow-big-left",
    "arrow-big-right",
    "arrow-big-up",
    "arrow-down",
    "arrow-down-circle",
    "arrow-down-left",
    "arrow-down-right",
    "arrow-left",
    "arrow-left-circle",
    "arrow-right",
    "arrow-right-circle",
    "arrow-up",
    "arrow-up-circle",
    "arrow-up-left",
    "arrow-up-right",
    "asterisk",
    "at-sign",
    "award",
    "axe",
    "axis-3d",
    "baby",
    "backpack",
    "baggage-claim",
    "banana",
    "banknote",
    "bar-chart",
    "bar-chart-2",
    "bar-chart-3",
    "bar-chart-4",
    "bar-chart-horizontal",
    "barcode",
    "baseline",
    "bath",
    "battery",
    "battery-charging",
    "battery-full",
    "battery-low",
    "battery-medium",
    "beaker",
    "bean",
    "bean-off",
    "bed",
    "bed-double",
    "bed-single",
    "beef",
    "beer",
    "bell",
    "bell-minus",
    "bell-off",
    "bell-plus",
    "bell-ring",
    "bike",
    "binary",
    "bitcoin",
    "bluetooth",
    "bluetooth-connected",
    "bluetooth-off",
    "bluetooth-searching",
    "bold",
    "bomb",
    "bone",
    "book",
    "book-open",
    "bookmark",
    "bookmark-minus",
    "bookmark-plus",
    "bot",
    "box",
    "box-select",
    "boxes",
    "brick-wall",
    "briefcase",
    "brush",
    "bug",
    "building",
    "building-2",
    "bus",
    "cake",
    "calculator",
    "calendar",
    "calendar-check",
    "calendar-check-2",
    "calendar-clock",
    "calendar-days",
    "calendar-heart",
    "calendar-minus",
    "calendar-off",
    "calendar-plus",
    "calendar-range",
    "calendar-search",
    "calendar-x",
    "calendar-x-2",
    "camera",
    "camera-off",
    "candy",
    "candy-off",
    "car",
    "carrot",
    "cast",
    "cat",
    "cctv",
    "check",
    "check-circle",
    "check-circle-2",
    "check-square",
    "chef-hat",
    "cherry",
    "chevron-down",
    "chevron-first",
    "chevron-last",
    "chevron-left",
    "chevron-right",
    "chevron-up",
    "chevrons-down",
    "chevrons-down-up",
    "chevrons-left",
    "chevrons-left-right",
    "chevrons-right",
    "chevrons-right-left",
    "chevrons-up",
    "chevrons-up-down",
    "chrome",
    "circle",
    "circle-dot",
    "circle-ellipsis",
    "circle-slashed",
    "citrus",
    "clapperboard",
    "clipboard",
    "clipboard-check",
    "clipboard-copy",
    "clipboard-edit",
    "clipboard-list",
    "clipboard-signature",
    "clipboard-type",
    "clipboard-x",
    "clock",
    "clock-1",
    "clock-10",
    "clock-11",
    "clock-12",
    "clock-2",
    "clock-3",
    "clock-4",
    "clock-5",
    "clock-6",
    "clock-7",
    "clock-8",
    "clock-9",
    "cloud",
    "cloud-cog",
    "cloud-drizzle",
    "cloud-fog",
    "cloud-hail",
    "cloud-lightning",
    "cloud-moon",
    "cloud-moon-rain",
    "cloud-off",
    "cloud-rain",
    "cloud-rain-wind",
    "cloud-snow",
    "cloud-sun",
    "cloud-sun-rain",
    "cloudy",
    "clover",
    "club",
    "code",
    "code-2",
    "codepen",
    "codesandbox",
    "coffee",
    "cog",
    "coins",
    "columns",
    "command",
    "compass",
    "component",
    "concierge-bell",
    "connection",
    "construction",
    "contact",
    "contrast",
    "cookie",
    "copy",
    "copyleft",
    "copyright",
    "corner-down-left",
    "corner-down-right",
    "corner-left-down",
    "corner-left-up",
    "corner-right-down",
    "corner-right-up",
    "corner-up-left",
    "corner-up-right",
    "cpu",
    "croissant",
    "crop",
    "cross",
    "crosshair",
    "crown",
    "cup-soda",
    "currency",
    "database",
    "delete",
    "dessert",
    "diamond",
    "dice-1",
    "dice-2",
    "dice-3",
    "dice-4",
    "dice-5",
    "dice-6",
    "dices",
    "diff",
    "disc",
    "divide",
    "divide-circle",
    "divide-square",
    "dna",
    "dna-off",
    "dog",
    "dollar-sign",
    "download",
    "download-cloud",
    "dribbble",
    "droplet",
    "droplets",
    "drumstick",
    "earth-lock",
    "edit",
    "edit-2",
    "edit-3",
    "egg",
    "egg-fried",
    "egg-off",
    "equal",
    "equal-not",
    "eraser",
    "euro",
    "expand",
    "external-link",
    "eye",
    "eye-off",
    "facebook",
    "factory",
    "fan",
    "fast-forward",
    "feather",
    "figma",
    "file",
    "file-archive",
    "file-audio",
    "file-audio-2",
    "file-axis-3d",
    "file-badge",
    "file-badge-2",
    "file-bar-chart",
    "file-bar-chart-2",
    "file-box",
    "file-check",
    "file-check-2",
    "file-clock",
    "file-code",
    "file-cog",
    "file-cog-2",
    "file-diff",
    "file-digit",
    "file-down",
    "file-edit",
    "file-heart",
    "file-image",
    "file-input",
    "file-json",
    "file-json-2",
    "file-key",
    "file-key-2",
    "file-line-chart",
    "file-lock",
    "file-lock-2",
    "file-minus",
    "file-minus-2",
    "file-output",
    "file-pie-chart",
    "file-plus",
    "file-plus-2",
    "file-question",
    "file-scan",
    "file-search",
    "file-search-2",
    "file-signature",
    "file-spreadsheet",
    "file-symlink",
    "file-terminal",
    "file-text",
    "file-type",
    "file-type-2",
    "file-up",
    "file-video",
    "file-video-2",
    "file-volume",
    "file-volume-2",
    "file-warning",
    "file-x",
    "file-x-2",
    "files",
    "film",
    "filter",
    "fingerprint",
    "fish",
    "fish-off",
    "flag",
    "flag-off",
    "flag-triangle-left",
    "flag-triangle-right",
    "flame",
    "flashlight",
    "flashlight-off",
    "flask-conical",
    "flask-round",
    "flip-horizontal",
    "flip-vertical",
    "flower",
    "flower-2",
    "focus",
    "folder",
    "folder-archive",
    "folder-check",
    "folder-clock",
    "folder-closed",
    "folder-cog",
    "folder-cog-2",
    "folder-down",
    "folder-edit",
    "folder-heart",
    "folder-input",
    "folder-key",
    "folder-lock",
    "folder-minus",
    "folder-open",
    "folder-output",
    "folder-plus",
    "folder-search",
    "folder-search-2",
    "folder-symlink",
    "folder-tree",
    "folder-up",
    "folder-x",
    "folders",
    "form-input",
    "forward",
    "frame",
    "framer",
    "frown",
    "fuel",
    "function-square",
    "gamepad",
    "gamepad-2",
    "gauge",
    "gavel",
    "gem",
    "ghost",
    "gift",
    "git-branch",
    "git-branch-plus",
    "git-commit",
    "git-compare",
    "git-fork",
    "git-merge",
    "git-pull-request",
    "github",
    "gitlab",
    "glasses",
    "globe",
    "globe-2",
    "grab",
    "graduation-cap",
    "grape",
    "grid",
    "grip-horizontal",
    "grip-vertical",
    "hammer",
    "hand",
    "hand-metal",
    "hard-drive",
    "hard-hat",
    "hash",
    "haze",
    "headphones",
    "heart",
    "heart-crack",
    "heart-handshake",
    "heart-off",
    "heart-pulse",
    "help-circle",
    "hexagon",
    "highlighter",
    "history",
    "home",
    "hop",
    "hop-off",
    "hourglass",
    "ice-cream",
    "image",
    "image-minus",
    "image-off",
    "image-plus",
    "import",
    "inbox",
    "indent",
    "indian-rupee",
    "infinity",
    "info",
    "inspect",
    "instagram",
    "italic",
    "japanese-yen",
    "joystick",
    "key",
    "keyboard",
    "lamp",
    "lamp-ceiling",
    "lamp-desk",
    "lamp-floor",
    "lamp-wall-down",
    "lamp-wall-up",
    "landmark",
    "languages",
    "laptop",
    "laptop-2",
    "lasso",
    "lasso-select",
    "laugh",
    "layers",
    "layout",
    "layout-dashboard",
    "layout-grid",
    "layout-list",
    "layout-template",
    "leaf",
    "library",
    "life-buoy",
    "lightbulb",
    "lightbulb-off",
    "line-chart",
    "link",
    "link-2",
    "link-2-off",
    "linkedin",
    "list",
    "list-checks",
    "list-end",
    "list-minus",
    "list-music",
    "list-ordered",
    "list-plus",
    "list-start",
    "list-video",
    "list-x",
    "loader",
    "loader-2",
    "locate",
    "locate-fixed",
    "locate-off",
    "lock",
    "lock-keyhole",
    "lock-keyhole-open",
    "lock-open",
    "log-in",
    "log-out",
    "luggage",
    "magnet",
    "mail",
    "mail-check",
    "mail-minus",
    "mail-open",
    "mail-plus",
    "mail-question",
    "mail-search",
    "mail-warning",
    "mail-x",
    "mails",
    "map",
    "map-pin",
    "map-pin-off",
    "martini",
    "maximize",
    "maximize-2",
    "medal",
    "megaphone",
    "megaphone-off",
    "meh",
    "menu",
    "message-circle",
    "message-square",
    "mic",
    "mic-2",
    "mic-off",
    "microscope",
    "microwave",
    "milestone",
    "milk",
    "milk-off",
    "minimize",
    "minimize-2",
    "minus",
    "minus-circle",
    "minus-square",
    "monitor",
    "monitor-off",
    "monitor-speaker",
    "moon",
    "more-horizontal",
    "more-vertical",
    "mountain",
    "mountain-snow",
    "mouse",
    "mouse-pointer",
    "mouse-pointer-2",
    "mouse-pointer-click",
    "move",
    "move-3d",
    "move-diagonal",
    "move-diagonal-2",
    "move-horizontal",
    "move-vertical",
    "music",
    "music-2",
    "music-3",
    "music-4",
    "navigation",
    "navigation-2",
    "navigation-2-off",
    "navigation-off",
    "network",
    "newspaper",
    "nfc",
    "nut",
    "nut-off",
    "octagon",
    "option",
    "outdent",
    "package",
    "package-2",
    "package-check",
    "package-minus",
    "package-open",
    "package-plus",
    "package-search",
    "package-x",
    "paint-bucket",
    "paintbrush",
    "paintbrush-2",
    "palette",
    "palmtree",
    "paperclip",
    "party-popper",
    "pause",
    "pause-circle",
    "pause-octagon",
    "pen-tool",
    "pencil",
    "percent",
    "person-standing",
    "phone",
    "phone-call",
    "phone-forwarded",
    "phone-incoming",
    "phone-missed",
    "phone-off",
    "phone-outgoing",
    "pi",
    "pie-chart",
    "piggy-bank",
    "pin",
    "pin-off",
    "pipette",
    "pizza",
    "plane",
    "play",
    "play-circle",
    "plug",
    "plug-2",
    "plus",
    "plus-circle",
    "plus-square",
    "pocket",
    "podcast",
    "pointer",
    "pound-sterling",
    "power",
    "power-off",
    "printer",
    "puzzle",
    "qr-code",
    "quote",
    "radio",
    "radio-receiver",
    "radio-tower",
    "radius",
    "rat",
    "receipt",
    "rectangle-horizontal",
    "rectangle-vertical",
    "recycle",
    "redo",
    "refresh-ccw",
    "refresh-cw",
    "refrigerator",
    "regex",
    "repeat",
    "repeat-1",
    "reply",
    "reply-all",
    "rewind",
    "rocket",
    "rocking-chair",
    "rotate-3d",
    "rotate-ccw",
    "rotate-cw",
    "rss",
    "ruler",
    "russian-ruble",
    "sailboat",
    "salad",
    "sandwich",
    "save",
    "scale",
    "scale-3d",
    "scaling",
    "scan",
    "scan-face",
    "scan-line",
    "scissors",
    "screen-share",
    "screen-share-off",
    "scroll",
    "search",
    "send",
    "separator",
    "separator-horizontal",
    "separator-vertical",
    "server",
    "server-cog",
    "server-crash",
    "server-off",
    "settings",
    "settings-2",
    "share",
    "share-2",
    "sheet",
    "shield",
    "shield-alert",
    "shield-check",
    "shield-close",
    "shield-off",
    "shield-plus",
    "shirt",
    "shopping-bag",
    "shopping-cart",
    "shovel",
    "shower-head",
    "shrink",
    "shrub",
    "shuffle",
    "sidebar",
    "sidebar-close",
    "sidebar-open",
    "sigma",
    "signal",
    "signal-high",
    "signal-low",
    "signal-medium",
    "signal-zero",
    "siren",
    "skip-back",
    "skip-forward",
    "skull",
    "slack",
    "slice",
    "sliders",
    "sliders-horizontal",
    "smartphone",
    "smartphone-charging",
    "smile",
    "smile-plus",
    "snowflake",
    "sofa",
    "sort-asc",
    "sort-desc",
    "soup",
    "space",
    "speaker",
    "spline",
    "split-square-horizontal",
    "split-square-vertical",
    "sprout",
    "square",
    "star",
    "star-half",
    "star-off",
    "stethoscope",
    "sticker",
    "sticky-note",
    "stop-circle",
    "stretch-horizontal",
    "stretch-vertical",
    "strikethrough",
    "subscript",
    "subtitles",
    "sun",
    "sun-dim",
    "sun-medium",
    "sun-moon",
    "sun-snow",
    "sunrise",
    "sunset",
    "superscript",
    "swiss-franc",
    "switch-camera",
    "sword",
    "swords",
    "syringe",
    "table",
    "table-2",
    "tablet",
    "tag",
    "tags",
    "target",
    "tent",
    "terminal",
    "terminal-square",
    "text-cursor",
    "text-cursor-input",
    "thermometer",
    "thermometer-snowflake",
    "thermometer-sun",
    "thumbs-down",
    "thumbs-up",
    "ticket",
    "timer",
    "timer-off",
    "timer-reset",
    "toggle-left",
    "toggle-right",
    "tornado",
    "toy-brick",
    "train",
    "trash",
    "trash-2",
    "tree",
    "tree-deciduous",
    "tree-pine",
    "trees",
    "trello",
    "trending-down",
    "trending-up",
    "triangle",
    "trophy",
    "truck",
    "tv",
    "tv-2",
    "twitch",
    "twitter",
    "type",
    "umbrella",
    "underline",
    "undo",
    "unlink",
    "unlink-2",
    "unlock",
    "upload",
    "upload-cloud",
    "usb",
    "user",
    "user-check",
    "user-cog",
    "user-minus",
    "user-plus",
    "user-x",
    "users",
    "utensils",
    "utensils-crossed",
    "venetian-mask",
    "verified",
    "vibrate",
    "vibrate-off",
    "video",
    "video-off",
    "videotape",
    "view",
    "voicemail",
    "volume",
    "volume-1",
    "volume-2",
    "volume-x",
    "vote",
    "wallet",
    "wallet-cards",
    "wallet-minimal",
    "wallpaper",
    "wand",
    "wand-sparkles",
    "warehouse",
    "washing-machine",
    "watch",
    "waves",
    "waypoints",
    "webcam",
    "webhook",
    "webhook-off",
    "weight",
    "wheat",
    "wheat-off",
    "whole-word",
    "wifi",
    "wifi-high",
    "wifi-low",
    "wifi-off",
    "wifi-zero",
    "wind",
    "wine",
    "wine-off",
    "workflow",
    "worm",
    "wrap-text",
    "wrench",
    "x",
    "youtube",
    "zap",
    "zap-off",
    "zoom-in",
    "zoom-out",
];
