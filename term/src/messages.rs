//! Fixed texts shown by the session.

pub const FONT_CHECK: &str = "
This is a text based game.

+--+--+--+--+--+
|  |  |  |  |  |
+--+--+--+--+--+

The above should look like a row of five squares.
If it does not, switch to a monospaced font until it does.
Press enter when you are ready.
";

pub const HOW_TO_PLAY: &str = "
HOW TO PLAY:

Enter the coordinates of the square you want to reveal as \"x,y\",
where x is the column number and y is the row number.
Rows are counted from the bottom, so 1,2 is the upper left corner of a 2x2 grid.

If you reveal a square with a mine, it's game over.
(Press enter to continue)
";

pub const COMMAND_LIST: &str = "
COMMANDS:

 * \"help\" shows these commands again.
 * \"flag x,y\" flags a square, \"unflag x,y\" removes the flag.
 * \"grid\" prints the grid again.
 * \"symbols\" explains the symbols on the grid.
 * \"hint\" reveals a random safe square, if you have hints left.
 * \"quit\" ends the game.
";

pub const SIZE_PROMPT: &str = "
~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

The default grid size is 15x15.
To choose another size, enter a natural number of at least 2 and the grid
will be NxN. Very large grids may not fit in your terminal.

To keep the default, press enter (or enter anything that isn't a natural number).
";

pub const SIZE_TOO_SMALL: &str =
    "\nThat would be too trivial, please enter a higher number: ";

pub const SIZE_TOO_LARGE: &str = "\nThat's a bit ridiculous now. Choose something lower than that, please \
(or enter anything that isn't a natural number for the default board): ";

pub const CONFIRM_LARGE: &str = "\nThat's a pretty large number, do you want to continue? (y/n) ";

pub const CONFIRM_HUGE: &str = "\nThat's a REALLY large number, do you want to continue? (y/n) ";

pub const IMPROPER_COORD: &str = "
The coordinate must be of the form \"x,y\", where x and y are natural numbers.

To flag a square (eg. 1,1), enter \"flag 1,1\". To unflag it, enter \"unflag 1,1\".
";

pub const COORD_OUT_OF_RANGE: &str = "\nThat coordinate was out of range.\n";

pub const SYMBOLS: &str = "
 * : Flagged square
 - : No adjacent squares have a mine
 2 : 2 adjacent squares have a mine
XX : Revealed square has a mine
";

pub const SEPARATOR: &str = "\n~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~\n";

pub const ALL_MINES: &str = "Somehow every single square had a bomb.";

pub const REPLAY_PROMPT: &str = "Play again? (y/n) ";

pub const REPLAY_AGAIN: &str = "Enter 'y' or 'n'. Play again? ";

pub const NO_HINTS: &str = "\nNo hints left.\n";

pub const BYE: &str = "Bye.";
